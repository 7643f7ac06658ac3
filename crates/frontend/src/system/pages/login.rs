use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::shared::directory_api::use_directory;
use crate::shared::navigation::route::UNIVERSITIES_PATH;
use crate::system::auth::{api, context};

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let auth = context::use_auth();
    let client = use_directory();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        let client = client.clone();
        let navigate = navigate.clone();

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            match api::login(&client, &email_val, &password_val).await {
                Ok(reply) => {
                    log::info!("login succeeded for {}", email_val.trim());
                    context::sign_in(auth, reply.data);
                    is_loading.set(false);
                    navigate(UNIVERSITIES_PATH, Default::default());
                }
                Err(message) => {
                    log::warn!("login failed: {}", message);
                    error_message.set(Some(message));
                    is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <form class="login-box" on:submit=on_submit>
                <h1>"University directory"</h1>
                <h2>"Sign in"</h2>

                <Flex vertical=true gap=FlexGap::Medium>
                    <Label>"Email"</Label>
                    <Input
                        input_type=InputType::Email
                        placeholder="user@nstu.ru"
                        value=email
                        disabled=Signal::derive(move || is_loading.get())
                    />

                    <Label>"Password"</Label>
                    <Input
                        input_type=InputType::Password
                        value=password
                        disabled=Signal::derive(move || is_loading.get())
                    />

                    {move || {
                        error_message
                            .get()
                            .map(|message| {
                                view! {
                                    <MessageBar intent=MessageBarIntent::Error>
                                        <span>{message}</span>
                                    </MessageBar>
                                }
                            })
                    }}

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </Flex>
            </form>
        </div>
    }
}
