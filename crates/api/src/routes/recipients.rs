//! Route definitions for the recipients resource.
//!
//! ```text
//! GET    /         -> list_recipients
//! POST   /         -> create_recipient
//! DELETE /{id}     -> delete_recipient
//! ```

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::recipients;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(recipients::list_recipients).post(recipients::create_recipient),
        )
        .route("/{id}", delete(recipients::delete_recipient))
}
