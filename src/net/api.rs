//! HTTP helpers for the identity-service endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`. Native builds: stubs
//! returning `None`/error since these endpoints only exist in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. A failed
//! identity lookup yields `None` and the session field stays at its
//! unresolved sentinel: there is no retry and no timeout, so a stalled
//! identity service leaves the gate suspended. That limitation is inherited
//! deliberately; the one strengthening is the local-login call, which
//! submits credentials in a POST body and surfaces its failure message
//! instead of embedding credentials in a navigable address.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::session::AuthMode;

/// Post-authentication navigation target shared by both login flows.
pub const LOGIN_REDIRECT_TARGET: &str = "/app";

#[cfg(any(test, feature = "csr"))]
fn provider_login_url() -> String {
    format!("/login/github?redirect_url={LOGIN_REDIRECT_TARGET}")
}

#[cfg(any(test, feature = "csr"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

/// Body of the local-login submission.
#[cfg(any(test, feature = "csr"))]
#[derive(serde::Serialize)]
struct LocalLoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Fetch the deployment's authentication mode from `/idp`.
/// Returns `None` on transport failure or a non-2xx response.
pub async fn fetch_auth_mode() -> Option<AuthMode> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/idp").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        let token = resp.text().await.ok()?;
        Some(AuthMode::parse(&token))
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Fetch whether the current browser session is authenticated from
/// `/is-authenticated`. Sends same-origin credentials; the response is a
/// JSON boolean.
pub async fn fetch_auth_status() -> Option<bool> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/is-authenticated")
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<bool>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Terminate the current session via `/logout`.
///
/// Returns `Some(())` once the endpoint has answered at all — the gateway
/// signals termination by responding, not by status code — and `None` on
/// transport failure, in which case the caller leaves the session state
/// untouched.
pub async fn sign_out() -> Option<()> {
    #[cfg(feature = "csr")]
    {
        gloo_net::http::Request::get("/logout")
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .send()
            .await
            .ok()
            .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Submit local credentials to `/login/local/callback` as a JSON POST.
///
/// # Errors
///
/// Returns a display-ready message if the request cannot be built, the
/// transport fails, or the gateway rejects the credentials.
pub async fn submit_local_login(username: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/login/local/callback")
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .json(&LocalLoginRequest { username, password })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Full-page navigation to the external provider's login endpoint.
pub fn redirect_to_provider_login() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&provider_login_url());
        }
    }
}

/// Full-page navigation to the fixed post-login target.
pub fn redirect_to_app() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_REDIRECT_TARGET);
        }
    }
}
