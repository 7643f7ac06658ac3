use contracts::domain::common::ResourceItem;
use leptos::prelude::*;

use crate::shared::components::{LoadStateView, PageHeader};
use crate::shared::directory_api::use_directory;
use crate::shared::icons::icon;
use crate::shared::loader::Loader;
use crate::shared::navigation::route::university_href;

/// Entry point of the directory: every university links to its own view.
#[component]
#[allow(non_snake_case)]
pub fn UniversitySelectPage() -> impl IntoView {
    let client = use_directory();
    let loader = Loader::<Vec<ResourceItem>>::new();
    loader.load("universities".to_string(), async move {
        client.universities().await
    });

    view! {
        <div class="page">
            <PageHeader title="Universities".to_string() />
            <LoadStateView loader=loader render=render_universities />
        </div>
    }
}

fn render_universities(universities: Vec<ResourceItem>) -> AnyView {
    if universities.is_empty() {
        return view! { <div class="detail-card__empty">"no universities"</div> }.into_any();
    }

    let rows = universities
        .into_iter()
        .map(|university| {
            view! {
                <a class="university-list__row" href=university_href(&university.id)>
                    {icon("university")}
                    <span>{university.name}</span>
                    {icon("chevron-right")}
                </a>
            }
        })
        .collect_view();

    view! { <nav class="university-list">{rows}</nav> }.into_any()
}
