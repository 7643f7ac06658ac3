//! Top header - brand and session controls.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::icons::icon;
use crate::shared::navigation::route::UNIVERSITIES_PATH;
use crate::system::auth::context::{sign_out, use_auth};

#[component]
pub fn TopHeader() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        sign_out(auth);
        navigate("/", Default::default());
    };

    view! {
        <div class="top-header">
            // Left section: brand
            <div class="top-header__brand">
                {icon("university")}
                <a class="top-header__title" href=UNIVERSITIES_PATH>
                    "University directory"
                </a>
            </div>

            // Right section: session
            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    hidden=move || !auth.with(|a| a.is_authenticated())
                    on:click=logout
                    title="Log out"
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
