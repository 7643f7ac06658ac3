use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::DirectoryConfig;
use crate::shared::directory_api::{DirectoryClient, HttpTransport};
use crate::system::auth::context::provide_auth;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = DirectoryConfig::from_build_env();
    log::info!("directory API base: {}", config.api_base());

    // Клиент справочника и сессия доступны всему приложению через context
    provide_context(DirectoryClient::new(config, HttpTransport));
    provide_auth();

    view! {
        <AppRoutes />
    }
}
