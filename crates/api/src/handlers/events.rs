//! SSE feed of list invalidation events.
//!
//! List views subscribe here and refetch whenever an event for their entity
//! kind arrives. At-least-one refetch per mutation; no dedup guarantee.

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use futures::StreamExt;
use tokio_stream::wrappers::BroadcastStream;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/events
///
/// Stream invalidation events as SSE. The event name is the entity kind
/// (`recipient` or `gift`); the body carries the event envelope.
pub async fn stream_invalidations(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = state.event_bus.subscribe();

    let stream = BroadcastStream::new(receiver).filter_map(|result| async move {
        match result {
            Ok(ev) => Event::default()
                .event(ev.entity.as_str())
                .json_data(&ev)
                .ok()
                .map(Ok),
            // A lagged subscriber missed older events; it refetches on the
            // next one anyway, so skip the error marker.
            Err(_) => None,
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
