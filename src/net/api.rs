//! REST API helpers for the HR backend's auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so auth failures degrade
//! UI behavior without crashing hydration. Bad credentials and network
//! faults both surface as `None`; the login page owns the user-facing
//! message.

use super::types::Identity;

/// Successful authentication payload from `POST /api/auth/login`.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct AuthSession {
    /// Opaque bearer token to attach to subsequent requests.
    pub token: String,
    /// The authenticated user record.
    pub user: Identity,
}

/// Exchange email + password for a bearer token and identity.
/// Returns `None` on bad credentials, transport failure, or on the server.
pub async fn login(email: &str, password: &str) -> Option<AuthSession> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&LoginRequest { email, password })
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<AuthSession>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        None
    }
}

/// Invalidate the session on the backend via `POST /api/auth/logout`.
///
/// Best-effort: the caller drops the local session regardless of the
/// outcome, so failures here are ignored.
pub async fn logout(credential: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .header("Authorization", &format!("Bearer {credential}"))
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credential;
    }
}
