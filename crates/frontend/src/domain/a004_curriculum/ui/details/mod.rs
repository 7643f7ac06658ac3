use contracts::domain::a004_curriculum::aggregate::{CurriculumDetail, Semester};
use contracts::domain::common::Identifier;
use contracts::shared::Category;
use leptos::prelude::*;

use crate::domain::common::{category_items, child_list_href};
use crate::shared::components::LoadStateView;
use crate::shared::directory_api::use_directory;
use crate::shared::loader::Loader;
use crate::shared::navigation::DirectoryRoute;

/// Curriculum record: semester plan plus the nested `study_groups` level.
#[component]
#[allow(non_snake_case)]
pub fn CurriculumDetails(
    route: Memo<DirectoryRoute>,
    depth: usize,
    id: Identifier,
) -> impl IntoView {
    let client = use_directory();
    let loader = Loader::<CurriculumDetail>::new();
    let request_id = id.clone();
    loader.load(format!("curriculum {}", id), async move {
        client.curriculum(&request_id).await
    });

    view! {
        <div class="detail-card">
            <LoadStateView
                loader=loader
                render=move |curriculum: CurriculumDetail| {
                    render_curriculum(route, depth, &id, curriculum)
                }
            />
        </div>
    }
}

fn render_curriculum(
    route: Memo<DirectoryRoute>,
    depth: usize,
    id: &Identifier,
    curriculum: CurriculumDetail,
) -> AnyView {
    let (semesters, groups_href) = route.with_untracked(|r| {
        let semesters = curriculum
            .semesters
            .iter()
            .map(|semester| semester_table(r, semester))
            .collect_view();
        (semesters, child_list_href(r, depth, id, Category::StudyGroups))
    });

    view! {
        <div class="detail-card__header">
            <h3>{curriculum.name}</h3>
        </div>
        <div class="detail-card__section">
            {category_items(route, groups_href, depth + 1, Category::StudyGroups, curriculum.study_groups)}
        </div>
        <div class="detail-card__section">
            <div class="detail-card__caption">"semesters"</div>
            {semesters}
        </div>
    }
    .into_any()
}

// Кафедра модуля ведёт на подразделение верхнего уровня
fn semester_table(route: &DirectoryRoute, semester: &Semester) -> impl IntoView {
    let rows = semester
        .modules
        .iter()
        .map(|module| {
            let href = route.top_level_item_href(Category::Subdivisions, &module.department_id);
            view! {
                <tr>
                    <td>{module.discipline_name.clone()}</td>
                    <td>
                        <a href=href>{module.department_name.clone()}</a>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="semester-table">
            <caption>{format!("semester {}", semester.value)}</caption>
            <thead>
                <tr>
                    <th>"discipline"</th>
                    <th>"department"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
