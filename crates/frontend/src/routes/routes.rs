use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_university::ui::details::UniversityPage;
use crate::domain::a001_university::ui::list::UniversitySelectPage;
use crate::layout::Shell;
use crate::shared::components::NotFound;
use crate::system::pages::login::LoginPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=LoginPage />
                    <Route path=path!("/universities") view=UniversitySelectPage />
                    // Одна страница на университет; категории в *rest разбирает она сама
                    <ParentRoute path=path!("/universities/:university_id") view=UniversityPage>
                        <Route path=path!("") view=|| () />
                        <Route path=path!("*rest") view=|| () />
                    </ParentRoute>
                </Routes>
            </Shell>
        </Router>
    }
}
