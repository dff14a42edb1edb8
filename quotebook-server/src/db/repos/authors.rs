//! Author repository

use chrono::Utc;
use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{Author, EntityName};

/// Author repository
pub struct AuthorRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> AuthorRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an author stamped with the current time.
    pub async fn create(&self, name: &EntityName) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO authors (name, created_at)
            VALUES ($1, $2)
            "#,
        )
        .bind(name.as_str())
        .bind(Utc::now())
        .execute(self.pool)
        .await
        .map_err(DbError::query("add author"))?;

        Ok(())
    }

    /// List every author in insertion order.
    pub async fn list(&self) -> Result<Vec<Author>, DbError> {
        sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, created_at
            FROM authors
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await
        .map_err(DbError::query("list authors"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn created_author_is_listed() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations");

        let repo = AuthorRepo::new(&pool);
        repo.create(&EntityName::new("Seneca").unwrap()).await.expect("insert");

        let listed = repo.list().await.expect("list");
        assert!(listed.iter().any(|a| a.name == "Seneca"));
    }
}
