//! Handlers for the `/recipients` resource.
//!
//! Recipients are immutable after creation except for deletion. Deleting a
//! recipient does NOT touch its gift ideas; dangling `recipient_id`
//! references are an accepted gap, not a cascade.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use giftlist_core::error::CoreError;
use giftlist_core::types::DbId;
use giftlist_db::models::recipient::CreateRecipient;
use giftlist_db::repositories::RecipientRepo;
use giftlist_events::{EntityKind, InvalidationEvent};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/recipients
///
/// List all recipients, most recently created first.
pub async fn list_recipients(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let recipients = RecipientRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: recipients }))
}

/// POST /api/v1/recipients
///
/// Create a recipient. Publishes a recipient invalidation after the write
/// resolves so subscribed lists refetch.
pub async fn create_recipient(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateRecipient>,
) -> AppResult<impl IntoResponse> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Recipient name must not be empty".into(),
        )));
    }

    let recipient = RecipientRepo::create(&state.pool, name).await?;

    state
        .event_bus
        .publish(InvalidationEvent::new(EntityKind::Recipient));

    tracing::info!(
        recipient_id = recipient.id,
        user_id = auth.user_id,
        "Recipient created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: recipient })))
}

/// DELETE /api/v1/recipients/{id}
///
/// Delete a recipient. Gift ideas referencing it are left untouched.
pub async fn delete_recipient(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(recipient_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = RecipientRepo::delete(&state.pool, recipient_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Recipient",
            id: recipient_id,
        }));
    }

    state
        .event_bus
        .publish(InvalidationEvent::new(EntityKind::Recipient));

    tracing::info!(recipient_id, user_id = auth.user_id, "Recipient deleted",);

    Ok(StatusCode::NO_CONTENT)
}
