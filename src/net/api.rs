//! REST helpers for the account/profile service.
//!
//! Client-side (`web`): real HTTP calls via `gloo-net`.
//! Host-side: stubs reporting a connection failure, so the crate compiles
//! and tests on the host without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Network-level failures collapse to [`ApiError::Connection`] (one fixed
//! user-visible message); a non-success status with a JSON `error` body
//! becomes [`ApiError::Service`] with the message passed through verbatim.

#![allow(clippy::unused_async)]

use super::config::ServiceConfig;
use super::types::{
    ApiError, ForgotPasswordRequest, LoginRequest, ProfileWire, RegisterRequest, ResetPasswordRequest,
};

/// Fallback when a non-success response carries no usable `error` field.
#[cfg(feature = "web")]
const REQUEST_FAILED_TEXT: &str = "Request failed.";

/// `POST /login`. Success yields the session identity to the caller.
///
/// # Errors
///
/// [`ApiError::Connection`] on network failure, [`ApiError::Service`] with
/// the server's message on a non-success status.
pub async fn login(config: &ServiceConfig, username: &str, password: &str) -> Result<(), ApiError> {
    let body = LoginRequest { username, password };
    post_json(&config.login_url(), &body).await
}

/// `POST /register`.
///
/// # Errors
///
/// See [`login`].
pub async fn register(config: &ServiceConfig, username: &str, email: &str, password: &str) -> Result<(), ApiError> {
    let body = RegisterRequest { username, email, password };
    post_json(&config.register_url(), &body).await
}

/// `POST /forgot-password`. Success means a reset code was dispatched by
/// email out-of-band.
///
/// # Errors
///
/// See [`login`].
pub async fn forgot_password(config: &ServiceConfig, email: &str) -> Result<(), ApiError> {
    let body = ForgotPasswordRequest { email };
    post_json(&config.forgot_password_url(), &body).await
}

/// `POST /reset-password`.
///
/// # Errors
///
/// See [`login`].
pub async fn reset_password(
    config: &ServiceConfig,
    email: &str,
    code: &str,
    new_password: &str,
) -> Result<(), ApiError> {
    let body = ResetPasswordRequest { email, code, new_password };
    post_json(&config.reset_password_url(), &body).await
}

/// `GET /profile/{user}`. Returns `None` on any failure; the caller keeps
/// its defaults, matching the degrade-without-crashing profile policy.
pub async fn fetch_profile(config: &ServiceConfig, username: &str) -> Option<ProfileWire> {
    #[cfg(feature = "web")]
    {
        let resp = gloo_net::http::Request::get(&config.profile_url(username))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<ProfileWire>().await.ok()
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (config, username);
        None
    }
}

/// `POST /profile/{user}`: push the whole profile in one request. The
/// service's echo is not read back.
///
/// # Errors
///
/// See [`login`].
pub async fn save_profile(config: &ServiceConfig, username: &str, profile: &ProfileWire) -> Result<(), ApiError> {
    post_json(&config.profile_url(username), profile).await
}

#[cfg(feature = "web")]
async fn post_json<B: serde::Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    let request = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|_| ApiError::Connection)?;
    let resp = request.send().await.map_err(|_| ApiError::Connection)?;

    if resp.ok() {
        return Ok(());
    }

    let message = resp
        .json::<super::types::ErrorBody>()
        .await
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| REQUEST_FAILED_TEXT.to_owned());
    Err(ApiError::Service(message))
}

#[cfg(not(feature = "web"))]
async fn post_json<B: serde::Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    let _ = (url, body);
    Err(ApiError::Connection)
}
