//! Recursive category tree of the university view.
//!
//! A level is "list of a category + detail of the selected item"; details of
//! categories with children render the next level from their own record.
//! Dispatch goes through plain functions returning `AnyView` so the levels
//! can nest into each other.

use contracts::domain::common::{Identifier, ResourceItem};
use contracts::shared::Category;
use leptos::prelude::*;

use crate::domain::a002_subdivision::ui::details::SubdivisionDetails;
use crate::domain::a003_study_group::ui::details::StudyGroupDetails;
use crate::domain::a004_curriculum::ui::details::CurriculumDetails;
use crate::domain::a005_person::ui::details::PersonDetails;
use crate::layout::tabs::category_label;
use crate::shared::components::{LoadStateView, ResourceListPanel};
use crate::shared::directory_api::use_directory;
use crate::shared::loader::Loader;
use crate::shared::navigation::DirectoryRoute;

/// Top-level collection of `category` (`GET /{category}`).
pub fn category_level(route: Memo<DirectoryRoute>, category: Category) -> AnyView {
    view! { <CategoryLevel route=route category=category /> }.into_any()
}

#[component]
fn CategoryLevel(route: Memo<DirectoryRoute>, category: Category) -> impl IntoView {
    let client = use_directory();
    let loader = Loader::<Vec<ResourceItem>>::new();
    loader.load(format!("{} collection", category.segment()), async move {
        client.collection(category).await
    });

    let base_href = route.with_untracked(|r| r.category_href(category));

    view! {
        <LoadStateView
            loader=loader
            render=move |items| category_items(route, base_href.clone(), 0, category, items)
        />
    }
}

/// List panel of `category` at `depth`. Rows link to `<base_href>/<id>`; the
/// selected row is whatever the route holds at `depth`, provided the route
/// names this category there.
pub fn category_items(
    route: Memo<DirectoryRoute>,
    base_href: String,
    depth: usize,
    category: Category,
    items: Vec<ResourceItem>,
) -> AnyView {
    let selected = Memo::new(move |_| {
        route.with(|r| {
            if r.category_at(depth) == Some(category) {
                r.selected_at(depth).cloned()
            } else {
                None
            }
        })
    });

    view! {
        <ResourceListPanel
            label=category_label(category)
            items=items
            selected=selected
            base_href=base_href
            detail=move |id| item_detail(route, depth, category, id)
        />
    }
    .into_any()
}

/// Detail record of one item, loaded by identifier.
pub fn item_detail(
    route: Memo<DirectoryRoute>,
    depth: usize,
    category: Category,
    id: Identifier,
) -> AnyView {
    match category {
        Category::Subdivisions => view! { <SubdivisionDetails route=route id=id /> }.into_any(),
        Category::StudyGroups => {
            view! { <StudyGroupDetails route=route depth=depth id=id /> }.into_any()
        }
        Category::Curriculums => {
            view! { <CurriculumDetails route=route depth=depth id=id /> }.into_any()
        }
        Category::Persons => view! { <PersonDetails route=route id=id /> }.into_any(),
    }
}

/// Base path of the `child` list beneath item `id` at `depth`.
pub fn child_list_href(
    route: &DirectoryRoute,
    depth: usize,
    id: &Identifier,
    child: Category,
) -> String {
    format!("{}/{}", route.item_href(depth, id), child.segment())
}
