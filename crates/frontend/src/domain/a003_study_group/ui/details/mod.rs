use contracts::domain::a003_study_group::aggregate::StudyGroupDetail;
use contracts::domain::common::Identifier;
use contracts::shared::Category;
use leptos::prelude::*;

use crate::domain::common::{category_items, child_list_href};
use crate::shared::components::LoadStateView;
use crate::shared::directory_api::use_directory;
use crate::shared::loader::Loader;
use crate::shared::navigation::DirectoryRoute;

/// Study group record: its curriculums as cross-links and its students as the
/// nested `persons` level.
#[component]
#[allow(non_snake_case)]
pub fn StudyGroupDetails(
    route: Memo<DirectoryRoute>,
    depth: usize,
    id: Identifier,
) -> impl IntoView {
    let client = use_directory();
    let loader = Loader::<StudyGroupDetail>::new();
    let request_id = id.clone();
    loader.load(format!("study group {}", id), async move {
        client.study_group(&request_id).await
    });

    view! {
        <div class="detail-card">
            <LoadStateView
                loader=loader
                render=move |group: StudyGroupDetail| render_study_group(route, depth, &id, group)
            />
        </div>
    }
}

fn render_study_group(
    route: Memo<DirectoryRoute>,
    depth: usize,
    id: &Identifier,
    group: StudyGroupDetail,
) -> AnyView {
    let (curriculum_links, students_href) = route.with_untracked(|r| {
        let links = group
            .curriculums
            .iter()
            .map(|curriculum| {
                let href = r.top_level_item_href(Category::Curriculums, &curriculum.id);
                view! {
                    <li>
                        <a href=href>{curriculum.name.clone()}</a>
                    </li>
                }
            })
            .collect_view();
        (links, child_list_href(r, depth, id, Category::Persons))
    });
    let students = group.student_items();

    view! {
        <div class="detail-card__header">
            <h3>{group.name}</h3>
        </div>
        <div class="detail-card__section">
            <div class="detail-card__caption">"curriculums"</div>
            <ul class="detail-card__links">{curriculum_links}</ul>
        </div>
        <div class="detail-card__section">
            {category_items(route, students_href, depth + 1, Category::Persons, students)}
        </div>
    }
    .into_any()
}
