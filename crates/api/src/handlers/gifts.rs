//! Handlers for the `/gifts` resource.
//!
//! Gift creation validates the referenced recipient and snapshots its name
//! for display; the snapshot is never kept in sync afterwards. Archive,
//! restore, mark-purchased, and edit all flow through the partial update.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use giftlist_core::error::CoreError;
use giftlist_core::types::DbId;
use giftlist_db::models::gift::{GiftListParams, NewGift, UpdateGift};
use giftlist_db::repositories::{GiftRepo, RecipientRepo};
use giftlist_events::{EntityKind, InvalidationEvent};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /gifts`.
#[derive(Debug, Deserialize)]
pub struct CreateGiftRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price_estimate: Option<f64>,
    pub url: Option<String>,
    pub recipient_id: DbId,
}

/// GET /api/v1/gifts
///
/// List gift ideas, newest first. Optional `recipient_id` filter; `archived`
/// flips between the active and archived views (default: active).
pub async fn list_gifts(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<GiftListParams>,
) -> AppResult<impl IntoResponse> {
    let gifts = GiftRepo::list(&state.pool, &params).await?;

    Ok(Json(DataResponse { data: gifts }))
}

/// GET /api/v1/gifts/{id}
///
/// Fetch a single gift idea, archived or not.
pub async fn get_gift(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(gift_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let gift = GiftRepo::find_by_id(&state.pool, gift_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Gift",
            id: gift_id,
        }))?;

    Ok(Json(DataResponse { data: gift }))
}

/// POST /api/v1/gifts
///
/// Create a gift idea. The referenced recipient must exist; its name is
/// snapshotted onto the gift. Status flags start false.
pub async fn create_gift(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateGiftRequest>,
) -> AppResult<impl IntoResponse> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Gift title must not be empty".into(),
        )));
    }

    // Resolve the recipient to snapshot its name; creation fails without it.
    let recipient = RecipientRepo::find_by_id(&state.pool, input.recipient_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recipient",
            id: input.recipient_id,
        }))?;

    let gift = GiftRepo::create(
        &state.pool,
        &NewGift {
            title: title.to_string(),
            description: input.description,
            price_estimate: input.price_estimate,
            url: input.url,
            recipient_id: recipient.id,
            recipient_name: recipient.name,
        },
    )
    .await?;

    state
        .event_bus
        .publish(InvalidationEvent::new(EntityKind::Gift));

    tracing::info!(gift_id = gift.id, user_id = auth.user_id, "Gift created",);

    Ok((StatusCode::CREATED, Json(DataResponse { data: gift })))
}

/// PUT /api/v1/gifts/{id}
///
/// Partially update a gift idea: edit fields, archive/restore, or mark
/// purchased. `updated_at` advances on every call.
pub async fn update_gift(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(gift_id): Path<DbId>,
    Json(mut input): Json<UpdateGift>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Gift title must not be empty".into(),
            )));
        }
        // Store the trimmed form, same as create.
        input.title = Some(title.to_string());
    }

    let gift = GiftRepo::update(&state.pool, gift_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Gift",
            id: gift_id,
        }))?;

    state
        .event_bus
        .publish(InvalidationEvent::new(EntityKind::Gift));

    tracing::info!(gift_id, user_id = auth.user_id, "Gift updated",);

    Ok(Json(DataResponse { data: gift }))
}

/// DELETE /api/v1/gifts/{id}
///
/// Delete a gift idea. The UI favours archiving; deletion remains exposed.
pub async fn delete_gift(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(gift_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = GiftRepo::delete(&state.pool, gift_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Gift",
            id: gift_id,
        }));
    }

    state
        .event_bus
        .publish(InvalidationEvent::new(EntityKind::Gift));

    tracing::info!(gift_id, user_id = auth.user_id, "Gift deleted",);

    Ok(StatusCode::NO_CONTENT)
}
