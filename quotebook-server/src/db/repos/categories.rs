//! Category repository
//!
//! - create: single INSERT, generated id is not returned
//! - list: insertion order (by generated id); a bad row fails the whole list

use chrono::Utc;
use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{Category, EntityName};

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a category stamped with the current time.
    pub async fn create(&self, name: &EntityName) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO categories (name, created_at)
            VALUES ($1, $2)
            "#,
        )
        .bind(name.as_str())
        .bind(Utc::now())
        .execute(self.pool)
        .await
        .map_err(DbError::query("add category"))?;

        Ok(())
    }

    /// List every category.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, created_at
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await
        .map_err(DbError::query("list categories"))
    }
}
