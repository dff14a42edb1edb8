//! Storage gateway trait and its PostgreSQL implementation
//!
//! Handlers only see `dyn QuoteStore`, so tests can swap in
//! [`MemoryStore`](super::MemoryStore).

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{AuthorRepo, CategoryRepo, QuoteRepo};
use super::DbError;
use crate::models::{Author, Category, EntityName, NewQuote};

/// Typed operations over the quote tables.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    async fn add_category(&self, name: &EntityName) -> Result<(), DbError>;

    async fn categories(&self) -> Result<Vec<Category>, DbError>;

    async fn add_author(&self, name: &EntityName) -> Result<(), DbError>;

    async fn authors(&self) -> Result<Vec<Author>, DbError>;

    async fn add_quote(&self, quote: &NewQuote) -> Result<(), DbError>;

    /// Check the backend is reachable.
    async fn ping(&self) -> Result<(), DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuoteStore for PgStore {
    async fn add_category(&self, name: &EntityName) -> Result<(), DbError> {
        CategoryRepo::new(&self.pool).create(name).await
    }

    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn add_author(&self, name: &EntityName) -> Result<(), DbError> {
        AuthorRepo::new(&self.pool).create(name).await
    }

    async fn authors(&self) -> Result<Vec<Author>, DbError> {
        AuthorRepo::new(&self.pool).list().await
    }

    async fn add_quote(&self, quote: &NewQuote) -> Result<(), DbError> {
        QuoteRepo::new(&self.pool).create(quote).await
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(DbError::query("ping database"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_inserts_are_all_listed() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations");
        let store = PgStore::new(pool);

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    let name = EntityName::new(&format!("concurrent-{i}")).unwrap();
                    store.add_category(&name).await
                })
            })
            .collect();

        for handle in handles {
            handle.await.expect("task panicked").expect("insert failed");
        }

        let names: Vec<String> = store
            .categories()
            .await
            .expect("list")
            .into_iter()
            .map(|c| c.name)
            .collect();
        for i in 0..10 {
            assert!(names.contains(&format!("concurrent-{i}")));
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ping_succeeds() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        PgStore::new(pool).ping().await.expect("ping");
    }
}
