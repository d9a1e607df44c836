//! Session-cookie helpers.
//!
//! The `session` cookie mirrors the access token so the page gate can check
//! for it before a page renders. The gate checks only cookie *presence*, not
//! token validity; API handlers independently validate the Bearer token.

use axum::http::header::{HeaderMap, COOKIE};

use crate::config::SESSION_COOKIE;

/// Extract the session cookie value from request headers, if present.
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
    })
}

/// `Set-Cookie` value installing the session cookie for the whole site.
pub fn set_session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value clearing the session cookie immediately.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
