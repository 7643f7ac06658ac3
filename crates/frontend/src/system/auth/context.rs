use contracts::system::auth::LoginTokens;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub access_token: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Puts the auth state into context, restored from localStorage.
pub fn provide_auth() {
    let state = RwSignal::new(AuthState {
        access_token: storage::get_access_token(),
    });
    provide_context(state);
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    expect_context::<RwSignal<AuthState>>()
}

/// Stores the tokens of a successful login and updates the state.
pub fn sign_in(auth: RwSignal<AuthState>, tokens: Option<LoginTokens>) {
    if let Some(tokens) = &tokens {
        storage::save_tokens(tokens);
    }
    auth.set(AuthState {
        access_token: tokens.map(|t| t.access_token),
    });
}

pub fn sign_out(auth: RwSignal<AuthState>) {
    storage::clear_tokens();
    auth.set(AuthState::default());
}
