use contracts::domain::common::Identifier;
use contracts::shared::Category;
use leptos::prelude::*;

use super::tab_labels::category_label;
use crate::shared::icons::icon;
use crate::shared::navigation::route::university_href;

/// One tab per category. Tabs are plain links, the active one is whatever
/// the current route says.
#[component]
pub fn CategoryTabs(
    #[prop(into)] university_id: Signal<Identifier>,
    #[prop(into)] active: Signal<Option<Category>>,
) -> impl IntoView {
    let tabs = Category::ALL
        .iter()
        .map(|&category| {
            let href = move || {
                format!(
                    "{}/{}",
                    university_id.with(university_href),
                    category.segment()
                )
            };
            view! {
                <a
                    href=href
                    class="category-tabs__tab"
                    class:category-tabs__tab--active=move || active.get() == Some(category)
                >
                    {icon(category.segment())}
                    <span>{category_label(category)}</span>
                </a>
            }
        })
        .collect_view();

    view! { <nav class="category-tabs">{tabs}</nav> }
}
