//! Login flow on top of the directory client.

use contracts::system::auth::{LoginReply, LoginRequest};

use crate::shared::directory_api::{ApiError, DirectoryClient, DirectoryTransport};

/// Both fields are required before anything is sent.
pub fn validate_credentials(email: &str, password: &str) -> Result<LoginRequest, String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required.".to_string());
    }
    if password.is_empty() {
        return Err("Password is required.".to_string());
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Message shown under the login form. The API's own `{message}` is shown
/// exactly as sent.
pub fn login_error_text(err: &ApiError) -> String {
    match err {
        ApiError::Status {
            message: Some(message),
            ..
        } => message.clone(),
        ApiError::Status {
            status,
            message: None,
        } => format!("login failed (status {status})"),
        other => other.to_string(),
    }
}

pub async fn login<T: DirectoryTransport>(
    client: &DirectoryClient<T>,
    email: &str,
    password: &str,
) -> Result<LoginReply, String> {
    let request = validate_credentials(email, password)?;
    client
        .login(&request)
        .await
        .map_err(|err| login_error_text(&err))
}
