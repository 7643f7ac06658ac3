use leptos::prelude::*;

use crate::shared::navigation::route::UNIVERSITIES_PATH;

#[component]
pub fn NotFound(#[prop(optional, into)] reason: Option<String>) -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"404"</h2>
            <p>{reason.unwrap_or_else(|| "page not found".to_string())}</p>
            <a href=UNIVERSITIES_PATH>"back to universities"</a>
        </div>
    }
}
