use contracts::domain::a005_person::aggregate::{PersonDetail, PersonRole};
use contracts::domain::common::Identifier;
use contracts::shared::Category;
use leptos::prelude::*;

use crate::shared::components::LoadStateView;
use crate::shared::directory_api::use_directory;
use crate::shared::loader::Loader;
use crate::shared::navigation::DirectoryRoute;

/// One rendered role: fixed title plus a link to what the role refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleLink {
    pub title: &'static str,
    pub label: String,
    pub href: String,
}

/// Template of a role; `None` for roles this client does not know, which
/// are skipped without a trace.
pub fn role_link(route: &DirectoryRoute, role: &PersonRole) -> Option<RoleLink> {
    match role {
        PersonRole::Student {
            study_group_id,
            study_group_name,
        } => Some(RoleLink {
            title: "student",
            label: format!("study group {}", study_group_name),
            href: route.top_level_item_href(Category::StudyGroups, study_group_id),
        }),
        PersonRole::Teacher {
            department_id,
            department_name,
        } => Some(RoleLink {
            title: "teacher",
            label: format!("department {}", department_name),
            href: route.top_level_item_href(Category::Subdivisions, department_id),
        }),
        PersonRole::SubdivisionMember {
            subdivision_id,
            subdivision_name,
            subdivision_role,
        } => Some(RoleLink {
            title: "subdivision member",
            label: if subdivision_role.is_empty() {
                format!("subdivision {}", subdivision_name)
            } else {
                format!("subdivision {} ({})", subdivision_name, subdivision_role)
            },
            href: route.top_level_item_href(Category::Subdivisions, subdivision_id),
        }),
        PersonRole::Unknown => None,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PersonDetails(route: Memo<DirectoryRoute>, id: Identifier) -> impl IntoView {
    let client = use_directory();
    let loader = Loader::<PersonDetail>::new();
    let what = format!("person {}", id);
    loader.load(what, async move { client.person(&id).await });

    view! {
        <div class="detail-card">
            <LoadStateView
                loader=loader
                render=move |person: PersonDetail| render_person(route, person)
            />
        </div>
    }
}

fn render_person(route: Memo<DirectoryRoute>, person: PersonDetail) -> AnyView {
    let links: Vec<RoleLink> = route.with_untracked(|r| {
        person
            .roles
            .iter()
            .filter_map(|role| role_link(r, role))
            .collect()
    });

    let roles = links
        .into_iter()
        .map(|link| {
            view! {
                <li class="person-role">
                    <span class="person-role__title">{link.title}</span>
                    <a href=link.href>{link.label}</a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="detail-card__header">
            <h3>{person.full_name}</h3>
        </div>
        <div class="detail-card__section">
            <div class="detail-card__caption">"roles"</div>
            <ul class="detail-card__links">{roles}</ul>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route() -> DirectoryRoute {
        DirectoryRoute::parse("/universities/5/persons/2").unwrap()
    }

    #[test]
    fn test_each_known_role_has_its_own_template() {
        let student = role_link(
            &route(),
            &PersonRole::Student {
                study_group_id: Identifier::from("3"),
                study_group_name: "avt-113".into(),
            },
        )
        .unwrap();
        assert_eq!(student.title, "student");
        assert_eq!(student.label, "study group avt-113");
        assert_eq!(student.href, "/universities/5/study_groups/3");

        let teacher = role_link(
            &route(),
            &PersonRole::Teacher {
                department_id: Identifier::from("12"),
                department_name: "computer science".into(),
            },
        )
        .unwrap();
        assert_eq!(teacher.title, "teacher");
        assert_eq!(teacher.href, "/universities/5/subdivisions/12");

        let member = role_link(
            &route(),
            &PersonRole::SubdivisionMember {
                subdivision_id: Identifier::from("4"),
                subdivision_name: "dean's office".into(),
                subdivision_role: "secretary".into(),
            },
        )
        .unwrap();
        assert_eq!(member.label, "subdivision dean's office (secretary)");
        assert_eq!(member.href, "/universities/5/subdivisions/4");
    }

    #[test]
    fn test_unknown_role_renders_nothing_and_keeps_siblings() {
        let person: PersonDetail = serde_json::from_str(
            r#"{
                "fullName": "artem pronko",
                "roles": [
                    {"role": "rector"},
                    {"role": "student", "studyGroupId": 1, "studyGroupName": "avt-113"}
                ]
            }"#,
        )
        .unwrap();

        let links: Vec<RoleLink> = person
            .roles
            .iter()
            .filter_map(|role| role_link(&route(), role))
            .collect();

        assert_eq!(person.roles.len(), 2);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "/universities/5/study_groups/1");
    }
}
