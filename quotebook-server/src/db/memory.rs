//! In-process store for tests and local runs without PostgreSQL
//!
//! Mirrors the PostgreSQL semantics: ids start at 1 and increase in insertion
//! order, listings come back in that order, and quote references are not
//! checked. Can be switched to "unreachable" to exercise failure paths.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use super::{DbError, QuoteStore};
use crate::models::{Author, Category, EntityName, NewQuote, Quote};

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    authors: Vec<Author>,
    quotes: Vec<Quote>,
}

/// Mutex-guarded tables; each operation holds the lock once.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    unreachable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail (`false`) or succeed (`true`).
    pub fn set_reachable(&self, reachable: bool) {
        self.unreachable.store(!reachable, Ordering::SeqCst);
    }

    /// Snapshot of stored quotes, oldest first.
    pub fn quotes(&self) -> Vec<Quote> {
        self.lock().quotes.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check(&self) -> Result<(), DbError> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(DbError::Unavailable {
                reason: "connection refused".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl QuoteStore for MemoryStore {
    async fn add_category(&self, name: &EntityName) -> Result<(), DbError> {
        self.check()?;
        let mut tables = self.lock();
        let id = tables.categories.len() as i64 + 1;
        tables.categories.push(Category {
            id,
            name: name.as_str().to_owned(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        self.check()?;
        Ok(self.lock().categories.clone())
    }

    async fn add_author(&self, name: &EntityName) -> Result<(), DbError> {
        self.check()?;
        let mut tables = self.lock();
        let id = tables.authors.len() as i64 + 1;
        tables.authors.push(Author {
            id,
            name: name.as_str().to_owned(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn authors(&self) -> Result<Vec<Author>, DbError> {
        self.check()?;
        Ok(self.lock().authors.clone())
    }

    async fn add_quote(&self, quote: &NewQuote) -> Result<(), DbError> {
        self.check()?;
        self.lock().quotes.push(Quote {
            category_id: quote.category_id,
            author_id: quote.author_id,
            message: quote.message.as_str().to_owned(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn ping(&self) -> Result<(), DbError> {
        self.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityRef;

    #[tokio::test]
    async fn ids_follow_insertion_order() {
        let store = MemoryStore::new();
        for name in ["stoic", "cynic", "epicurean"] {
            store.add_category(&EntityName::new(name).unwrap()).await.unwrap();
        }

        let listed = store.categories().await.unwrap();
        let pairs: Vec<(i64, &str)> = listed.iter().map(|c| (c.id, c.name.as_str())).collect();
        assert_eq!(pairs, vec![(1, "stoic"), (2, "cynic"), (3, "epicurean")]);
    }

    #[tokio::test]
    async fn empty_listing_is_ok() {
        let store = MemoryStore::new();
        assert!(store.categories().await.unwrap().is_empty());
        assert!(store.authors().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn quotes_keep_dangling_references() {
        let store = MemoryStore::new();
        let quote = NewQuote::new(EntityRef::Id(42), EntityRef::Id(7), "know thyself").unwrap();
        store.add_quote(&quote).await.unwrap();

        let stored = store.quotes();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].category_id, 42);
        assert_eq!(stored[0].author_id, 7);
        assert_eq!(stored[0].message, "know thyself");
    }

    #[tokio::test]
    async fn unreachable_fails_every_operation() {
        let store = MemoryStore::new();
        store.set_reachable(false);

        assert!(matches!(store.ping().await, Err(DbError::Unavailable { .. })));
        assert!(store.authors().await.is_err());
        assert!(store
            .add_author(&EntityName::new("Zeno").unwrap())
            .await
            .is_err());

        store.set_reachable(true);
        assert!(store.ping().await.is_ok());
        assert!(store.authors().await.unwrap().is_empty());
    }
}
