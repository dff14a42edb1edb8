//! PostgreSQL pool behind `PgStore`
//!
//! `quotebook serve` and `quotebook migrate` open the pool once at startup.
//! The first connection is made eagerly, so a bad or unreachable DSN fails the
//! command before any route is served; after that, request concurrency is
//! bounded only by the connection limit below.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connection limit used when `--max-connections` is not given.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open the pool with [`DEFAULT_MAX_CONNECTIONS`].
///
/// ```ignore
/// let pool = create_pool("postgres://quotes@localhost/quotes").await?;
/// let store = PgStore::new(pool);
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Open the pool and connect once before returning.
///
/// A DSN that does not parse fails immediately; one that parses but points
/// nowhere fails once sqlx gives up acquiring the first connection.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
