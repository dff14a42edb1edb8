//! Database layer - connection pool, schema, repositories and the storage
//! gateway handlers talk to
//!
//! # Design Principles
//!
//! - Connection pool, no Arc<Mutex<Connection>>
//! - One statement per operation, no transactions, no retries
//! - Listings fail as a whole; rows are never silently dropped

pub mod error;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use sqlx::PgPool;

pub use error::DbError;
pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use store::{PgStore, QuoteStore};
