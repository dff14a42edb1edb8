//! Quote repository
//!
//! Quotes live in the `messages` table. Category and author ids are written
//! as given; nothing checks that they exist.

use chrono::Utc;
use sqlx::PgPool;

use crate::db::DbError;
use crate::models::NewQuote;

/// Quote repository
pub struct QuoteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuoteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a quote stamped with the current time.
    pub async fn create(&self, quote: &NewQuote) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO messages (category_id, author_id, message, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(quote.category_id)
        .bind(quote.author_id)
        .bind(quote.message.as_str())
        .bind(Utc::now())
        .execute(self.pool)
        .await
        .map_err(DbError::query("add quote"))?;

        Ok(())
    }
}
