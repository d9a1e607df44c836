//! Gift idea entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use giftlist_core::types::{DbId, Timestamp};

/// A row from the `gifts` table.
///
/// `recipient_name` is a snapshot taken at creation time for display; it is
/// not kept in sync with the recipient. `recipient_id` may dangle after the
/// referenced recipient is deleted (no cascade).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GiftIdea {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub price_estimate: Option<f64>,
    pub url: Option<String>,
    pub recipient_id: DbId,
    pub recipient_name: String,
    pub is_purchased: bool,
    pub is_archived: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload for a new gift idea.
///
/// `recipient_name` is resolved by the caller from the referenced recipient;
/// status flags always start false and are not part of the payload.
#[derive(Debug, Clone)]
pub struct NewGift {
    pub title: String,
    pub description: String,
    pub price_estimate: Option<f64>,
    pub url: Option<String>,
    pub recipient_id: DbId,
    pub recipient_name: String,
}

/// DTO for partially updating a gift idea. Only non-`None` fields are applied.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateGift {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_estimate: Option<f64>,
    pub url: Option<String>,
    pub is_purchased: Option<bool>,
    pub is_archived: Option<bool>,
}

/// Query parameters accepted by the gift list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct GiftListParams {
    /// Restrict to a single recipient. When omitted, all gifts are returned.
    pub recipient_id: Option<DbId>,
    /// Show archived gifts instead of active ones (default: false).
    pub archived: Option<bool>,
}
