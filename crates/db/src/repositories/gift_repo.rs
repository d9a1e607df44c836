//! Repository for the `gifts` table.

use sqlx::PgPool;

use giftlist_core::types::DbId;

use crate::models::gift::{GiftIdea, GiftListParams, NewGift, UpdateGift};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, price_estimate, url, recipient_id, \
                        recipient_name, is_purchased, is_archived, created_at, updated_at";

/// Provides CRUD operations for gift ideas.
pub struct GiftRepo;

impl GiftRepo {
    /// Insert a new gift idea, returning the created row.
    ///
    /// `is_purchased` and `is_archived` start false; timestamps are assigned
    /// by the database.
    pub async fn create(pool: &PgPool, input: &NewGift) -> Result<GiftIdea, sqlx::Error> {
        let query = format!(
            "INSERT INTO gifts (title, description, price_estimate, url, recipient_id, recipient_name)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GiftIdea>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price_estimate)
            .bind(&input.url)
            .bind(input.recipient_id)
            .bind(&input.recipient_name)
            .fetch_one(pool)
            .await
    }

    /// Find a gift idea by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GiftIdea>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gifts WHERE id = $1");
        sqlx::query_as::<_, GiftIdea>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List gift ideas, newest first.
    ///
    /// The default view shows active (non-archived) gifts; pass
    /// `archived = true` to see archived ones instead. An optional recipient
    /// filter restricts the result to a single recipient.
    pub async fn list(
        pool: &PgPool,
        params: &GiftListParams,
    ) -> Result<Vec<GiftIdea>, sqlx::Error> {
        let archived = params.archived.unwrap_or(false);

        match params.recipient_id {
            Some(recipient_id) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM gifts
                     WHERE recipient_id = $1 AND is_archived = $2
                     ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, GiftIdea>(&query)
                    .bind(recipient_id)
                    .bind(archived)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM gifts
                     WHERE is_archived = $1
                     ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, GiftIdea>(&query)
                    .bind(archived)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Update a gift idea. Only non-`None` fields in `input` are applied;
    /// `updated_at` advances via the database trigger on every call.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGift,
    ) -> Result<Option<GiftIdea>, sqlx::Error> {
        let query = format!(
            "UPDATE gifts SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                price_estimate = COALESCE($4, price_estimate),
                url = COALESCE($5, url),
                is_purchased = COALESCE($6, is_purchased),
                is_archived = COALESCE($7, is_archived)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GiftIdea>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price_estimate)
            .bind(&input.url)
            .bind(input.is_purchased)
            .bind(input.is_archived)
            .fetch_optional(pool)
            .await
    }

    /// Delete a gift idea by ID.
    ///
    /// Returns `true` if a row was deleted. The UI favours archiving, but
    /// deletion remains a first-class operation.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gifts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
