//! Schema setup for the quote tables
//!
//! Idempotent: every statement is `IF NOT EXISTS`, so this runs on each
//! server start. `messages` deliberately has no foreign keys; a quote may
//! point at a category or author id that does not exist.

use sqlx::PgPool;

use super::DbError;

/// Create all tables and indexes if they are missing
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running schema migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(DbError::query("create categories table"))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS authors (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(DbError::query("create authors table"))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id BIGSERIAL PRIMARY KEY,
            category_id BIGINT NOT NULL,
            author_id BIGINT NOT NULL,
            message TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(DbError::query("create messages table"))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_messages_category ON messages(category_id)")
        .execute(pool)
        .await
        .map_err(DbError::query("create messages index"))?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_messages_author ON messages(author_id)")
        .execute(pool)
        .await
        .map_err(DbError::query("create messages index"))?;

    tracing::info!("Schema migrations complete");
    Ok(())
}
