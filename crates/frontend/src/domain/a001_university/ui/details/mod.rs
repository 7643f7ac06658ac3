//! University view: header, category tab bar and the recursive category
//! body, all derived from `location.pathname`.

use contracts::domain::a001_university::aggregate::UniversityDetail;
use contracts::domain::common::Identifier;
use contracts::shared::Category;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::domain::common::category_level;
use crate::layout::tabs::CategoryTabs;
use crate::shared::components::{NotFound, PageHeader};
use crate::shared::directory_api::use_directory;
use crate::shared::loader::{LoadState, Loader};
use crate::shared::navigation::route::university_id_of;
use crate::shared::navigation::{DirectoryRoute, RouteError};

/// What the body below the tab bar shows. The body is rebuilt only when this
/// changes; deeper levels react to the route on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyKey {
    NotFound(String),
    NoCategory(Identifier),
    Category(Identifier, Category),
}

impl BodyKey {
    pub fn from_route(parsed: &Result<DirectoryRoute, RouteError>) -> Self {
        match parsed {
            Err(err) => BodyKey::NotFound(err.to_string()),
            Ok(route) => match route.active_tab() {
                None => BodyKey::NoCategory(route.university_id.clone()),
                Some(category) => BodyKey::Category(route.university_id.clone(), category),
            },
        }
    }
}

/// Active tab of a path; `None` for a path that does not parse, so an
/// unknown category leaves no tab highlighted.
pub fn active_tab_of(parsed: &Result<DirectoryRoute, RouteError>) -> Option<Category> {
    parsed.as_ref().ok().and_then(|route| route.active_tab())
}

#[component]
#[allow(non_snake_case)]
pub fn UniversityPage() -> impl IntoView {
    let pathname = use_location().pathname;
    let parsed = Memo::new(move |_| pathname.with(|p| DirectoryRoute::parse(p)));

    // Последний корректный маршрут; при ошибке тело показывает 404
    let route = Memo::new(move |previous: Option<&DirectoryRoute>| {
        parsed.with(|parsed| match parsed {
            Ok(route) => route.clone(),
            Err(_) => previous.cloned().unwrap_or_default(),
        })
    });
    let university_id =
        Memo::new(move |_| pathname.with(|p| university_id_of(p)).unwrap_or_default());
    let active_tab = Memo::new(move |_| parsed.with(active_tab_of));
    let body = Memo::new(move |_| parsed.with(BodyKey::from_route));

    let client = use_directory();
    let university = Loader::<UniversityDetail>::new();
    Effect::new(move |_| {
        let id = university_id.get();
        let client = client.clone();
        university.load(format!("university {}", id), async move {
            client.university(&id).await
        });
    });

    // Пока имя не пришло (или не пришло вовсе), заголовок показывает id
    let title = Signal::derive(move || match university.state() {
        LoadState::Loaded(detail) => detail.name,
        _ => university_id.get().to_string(),
    });

    view! {
        <div class="page university-page">
            <PageHeader title=title subtitle="university".to_string() />
            <CategoryTabs university_id=university_id active=active_tab />
            <div class="university-page__body">
                {move || match body.get() {
                    BodyKey::NotFound(reason) => view! { <NotFound reason=reason /> }.into_any(),
                    BodyKey::NoCategory(_) => {
                        view! {
                            <div class="university-page__hint">"choose a category above"</div>
                        }
                            .into_any()
                    }
                    BodyKey::Category(_, category) => category_level(route, category),
                }}
            </div>
        </div>
    }
}
