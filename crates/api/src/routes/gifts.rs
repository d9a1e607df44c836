//! Route definitions for the gifts resource.
//!
//! ```text
//! GET    /         -> list_gifts
//! POST   /         -> create_gift
//! GET    /{id}     -> get_gift
//! PUT    /{id}     -> update_gift
//! DELETE /{id}     -> delete_gift
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::gifts;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gifts::list_gifts).post(gifts::create_gift))
        .route(
            "/{id}",
            get(gifts::get_gift)
                .put(gifts::update_gift)
                .delete(gifts::delete_gift),
        )
}
