pub mod auth;
pub mod gifts;
pub mod health;
pub mod pages;
pub mod recipients;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register              create account (public)
/// /auth/login                 login (public)
/// /auth/logout                clear session cookie
/// /auth/me                    current user (requires auth)
///
/// /recipients                 list, create
/// /recipients/{id}            delete (no cascade to gifts)
///
/// /gifts                      list (?recipient_id=, ?archived=), create
/// /gifts/{id}                 fetch, update, delete
///
/// /parse                      heuristic text parser preview (POST)
/// /events                     SSE invalidation feed (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/recipients", recipients::router())
        .nest("/gifts", gifts::router())
        .route("/parse", post(handlers::parse::parse_text))
        .route("/events", get(handlers::events::stream_invalidations))
}
