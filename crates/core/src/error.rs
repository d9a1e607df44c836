//! Domain error taxonomy.
//!
//! Transport-agnostic: the API layer decides how each variant renders over
//! HTTP. Handlers construct these directly; repositories stay on raw
//! `sqlx::Error` and are classified at the boundary.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist (e.g. a gift naming a recipient
    /// that was never created or has been deleted).
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input rejected before any write happened.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("internal error: {0}")]
    Internal(String),
}
