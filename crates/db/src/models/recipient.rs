//! Recipient entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use giftlist_core::types::{DbId, Timestamp};

/// A row from the `recipients` table.
///
/// Recipients are immutable after creation except for deletion.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Recipient {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new recipient.
#[derive(Debug, Deserialize)]
pub struct CreateRecipient {
    pub name: String,
}
