//! Repository for the `recipients` table.

use sqlx::PgPool;

use giftlist_core::types::DbId;

use crate::models::recipient::Recipient;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for recipients.
pub struct RecipientRepo;

impl RecipientRepo {
    /// Insert a new recipient, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Recipient, sqlx::Error> {
        let query = format!(
            "INSERT INTO recipients (name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recipient>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Find a recipient by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Recipient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipients WHERE id = $1");
        sqlx::query_as::<_, Recipient>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all recipients, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Recipient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipients ORDER BY created_at DESC");
        sqlx::query_as::<_, Recipient>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete a recipient by ID. Gift ideas referencing it are untouched.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recipients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
