use contracts::domain::a002_subdivision::aggregate::SubdivisionDetail;
use contracts::domain::common::Identifier;
use contracts::shared::Category;
use leptos::prelude::*;

use crate::shared::components::LoadStateView;
use crate::shared::directory_api::use_directory;
use crate::shared::loader::Loader;
use crate::shared::navigation::DirectoryRoute;

#[component]
#[allow(non_snake_case)]
pub fn SubdivisionDetails(route: Memo<DirectoryRoute>, id: Identifier) -> impl IntoView {
    let client = use_directory();
    let loader = Loader::<SubdivisionDetail>::new();
    let what = format!("subdivision {}", id);
    loader.load(what, async move { client.subdivision(&id).await });

    view! {
        <div class="detail-card">
            <LoadStateView
                loader=loader
                render=move |subdivision: SubdivisionDetail| render_subdivision(route, subdivision)
            />
        </div>
    }
}

fn render_subdivision(route: Memo<DirectoryRoute>, subdivision: SubdivisionDetail) -> AnyView {
    let members = if subdivision.members.is_empty() {
        view! { <div class="detail-card__empty">"no members"</div> }.into_any()
    } else {
        let links = route.with_untracked(|r| {
            subdivision
                .members
                .iter()
                .map(|member| {
                    let href = r.top_level_item_href(Category::Persons, &member.person_id);
                    view! {
                        <li>
                            <a href=href>{member.display_label()}</a>
                        </li>
                    }
                })
                .collect_view()
        });
        view! { <ul class="detail-card__links">{links}</ul> }.into_any()
    };

    view! {
        <div class="detail-card__header">
            <h3>{subdivision.name}</h3>
        </div>
        <div class="detail-card__section">
            <div class="detail-card__caption">"members"</div>
            {members}
        </div>
    }
    .into_any()
}
