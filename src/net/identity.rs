//! Identity endpoints: signup, login, current-account lookup, logout.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, carrying the
//! project header and cookie credentials. Server-side (SSR): stubs, since
//! the session cookie only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Login and signup surface backend messages as `Result<_, String>` for
//! inline display; they never touch session state themselves. The
//! current-account lookup distinguishes "no session" (`Ok(None)`) from
//! transport failure (`Err`) so the resolver can log the latter. Logout is
//! best-effort: remote failure is logged and the caller proceeds.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use super::backend::BackendConfig;
use super::types::Profile;
#[cfg(feature = "hydrate")]
use super::types::SessionHandle;

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(operation: &str, status: u16) -> String {
    format!("{operation} failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn backend_error_message(operation: &str, resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    match resp.json::<super::types::ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => request_failed_message(operation, status),
    }
}

/// Create an account, then log it in, returning the new profile.
///
/// # Errors
///
/// Returns the backend's message if signup or the follow-up login fails.
pub async fn create_account(
    config: &BackendConfig,
    name: &str,
    email: &str,
    password: &str,
) -> Result<Profile, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "userId": uuid::Uuid::new_v4().to_string(),
            "name": name,
            "email": email,
            "password": password,
        });
        let resp = gloo_net::http::Request::post(&config.account_url())
            .header(super::backend::PROJECT_HEADER, &config.project_id)
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(backend_error_message("signup", resp).await);
        }
        let profile: Profile = resp.json().await.map_err(|e| e.to_string())?;
        login(config, email, password).await?;
        Ok(profile)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, name, email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an email + password session.
///
/// # Errors
///
/// Returns the backend's message on invalid credentials or transport error.
pub async fn login(config: &BackendConfig, email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&config.email_session_url())
            .header(super::backend::PROJECT_HEADER, &config.project_id)
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(backend_error_message("login", resp).await);
        }
        let _session: SessionHandle = resp.json().await.map_err(|e| e.to_string())?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email, password);
        Err("not available on server".to_owned())
    }
}

/// Ask the backend who the current caller is.
///
/// `Ok(None)` means the backend answered definitively that no session is
/// active (401). On the server this is always `Ok(None)`.
///
/// # Errors
///
/// Returns a message on transport failure or a malformed/unexpected
/// response; the caller decides how to degrade.
pub async fn fetch_current_account(config: &BackendConfig) -> Result<Option<Profile>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.account_url())
            .header(super::backend::PROJECT_HEADER, &config.project_id)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 401 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(request_failed_message("session check", resp.status()));
        }
        let profile: Profile = resp.json().await.map_err(|e| e.to_string())?;
        Ok(Some(profile))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Ok(None)
    }
}

/// Delete the account's sessions server-side. Best-effort: a failure is
/// logged and the local session still ends.
pub async fn logout(config: &BackendConfig) {
    #[cfg(feature = "hydrate")]
    {
        let result = gloo_net::http::Request::delete(&config.sessions_url())
            .header(super::backend::PROJECT_HEADER, &config.project_id)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await;
        match result {
            Ok(resp) if resp.ok() => {}
            Ok(resp) => log::warn!("remote logout failed: {}", resp.status()),
            Err(e) => log::warn!("remote logout failed: {e}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}
