//! quotebook-server: quotes, authors and categories over HTTP
//!
//! A storage gateway over PostgreSQL plus an axum router that decodes JSON
//! requests, calls one gateway operation, and answers with JSON or an error
//! envelope.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryStore, PgStore, QuoteStore};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
