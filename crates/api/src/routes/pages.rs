//! Entry pages and the edge gate.
//!
//! `/gifts` is gated on the *presence* of the session cookie, mirroring an
//! edge middleware check: no cookie means an immediate redirect to `/login`
//! before anything renders. Token validity is enforced separately by the
//! [`AuthUser`](crate::middleware::auth::AuthUser) extractor on API calls,
//! so the two checks are intentionally redundant.

use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{routing::get, Router};

use crate::middleware::session::session_cookie;
use crate::state::AppState;

/// GET /login -- unauthenticated entry page.
async fn login_page() -> Html<&'static str> {
    Html(
        "<!doctype html>\
         <html><head><title>Gift List - Sign in</title></head>\
         <body><h1>Sign in</h1>\
         <form id=\"login\"><input name=\"email\" type=\"email\" placeholder=\"Email\">\
         <input name=\"password\" type=\"password\" placeholder=\"Password\">\
         <button type=\"submit\">Sign in</button></form>\
         </body></html>",
    )
}

/// GET /gifts -- authenticated entry page, gated on the session cookie.
async fn gifts_page(headers: HeaderMap) -> Response {
    if session_cookie(&headers).is_none() {
        return Redirect::to("/login").into_response();
    }

    Html(
        "<!doctype html>\
         <html><head><title>Gift List</title></head>\
         <body><h1>Gift Ideas</h1>\
         <div id=\"recipients\"></div>\
         <div id=\"gifts\"></div>\
         </body></html>",
    )
    .into_response()
}

/// Mount the page routes (root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page))
        .route("/gifts", get(gifts_page))
}
