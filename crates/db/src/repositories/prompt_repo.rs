//! Repository for the `prompts` table.

use promptbase_core::query::PromptQuery;
use promptbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::prompt::{CreatePrompt, Prompt, UpdatePrompt};

/// Column list for prompts queries.
const COLUMNS: &str = "id, title, prompt, is_favorite, created_at, updated_at";

/// Provides the list operation and CRUD statements for prompts.
pub struct PromptRepo;

impl PromptRepo {
    /// List prompts matching the search text and favorite filter, ordered by
    /// the requested column and direction.
    ///
    /// The search is a case-insensitive substring match against the title
    /// or the body; an empty search matches every row.
    pub async fn list(pool: &PgPool, query: &PromptQuery) -> Result<Vec<Prompt>, sqlx::Error> {
        let favorite_flag = query.favorites.required_flag();

        let favorite_clause = if favorite_flag.is_some() {
            "AND is_favorite = $2"
        } else {
            ""
        };

        let sql = format!(
            "SELECT {COLUMNS} FROM prompts \
             WHERE (title ILIKE $1 OR prompt ILIKE $1) \
             {favorite_clause} \
             ORDER BY {order}",
            order = query.order_clause(),
        );

        let mut q = sqlx::query_as::<_, Prompt>(&sql).bind(query.search_pattern());
        if let Some(flag) = favorite_flag {
            q = q.bind(flag);
        }
        q.fetch_all(pool).await
    }

    /// Find a prompt by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompts WHERE id = $1");
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a prompt with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM prompts WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Insert a new prompt. Returns the created row.
    ///
    /// Both timestamps come from a single `NOW()` so they start out equal.
    pub async fn create(pool: &PgPool, input: &CreatePrompt) -> Result<Prompt, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompts (title, prompt, is_favorite, created_at, updated_at) \
             VALUES ($1, $2, $3, NOW(), NOW()) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(&input.title)
            .bind(&input.prompt)
            .bind(input.is_favorite)
            .fetch_one(pool)
            .await
    }

    /// Overwrite title, body and favorite flag and bump `updated_at`.
    ///
    /// `updated_at` always moves strictly forward, even when the clock reads
    /// the same microsecond as the previous write. Returns `None` if the row
    /// does not exist or its `updated_at` no longer matches
    /// `expected_updated_at`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePrompt,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!(
            "UPDATE prompts SET \
                title = $2, \
                prompt = $3, \
                is_favorite = $4, \
                updated_at = GREATEST(clock_timestamp(), updated_at + INTERVAL '1 microsecond') \
             WHERE id = $1 \
               AND ($5::timestamptz IS NULL OR updated_at = $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.prompt)
            .bind(input.is_favorite)
            .bind(input.expected_updated_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete a prompt by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prompts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
