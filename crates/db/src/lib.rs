//! Persistence layer for the `prompts` table.
//!
//! Pool construction, a liveness probe, the idempotent schema bootstrap, the
//! row model and the [`repositories::PromptRepo`] query set.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod schema;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Ensure the `prompts` table and its indexes exist.
///
/// Every statement is `IF NOT EXISTS`, so running this against a populated
/// database leaves existing rows untouched.
pub async fn bootstrap_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    for statement in schema::STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!(statements = schema::STATEMENTS.len(), "Schema bootstrap complete");
    Ok(())
}
