//! Command implementations for the quotebook CLI

pub mod migrate;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;
use quotebook_server::db::{create_pool_with_options, PgPool, DEFAULT_MAX_CONNECTIONS};

use crate::config;

pub use migrate::run_migrate;
pub use serve::run_serve;

/// Database connection options shared by every command
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Database connection string (falls back to DSN, then DATABASE_URL)
    #[arg(long, value_name = "DSN")]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Resolve the DSN and open the pool. Failure here is fatal for the
    /// calling command.
    pub async fn connect(&self) -> Result<PgPool> {
        let database_url = config::resolve_database_url(self.database_url.clone())?;

        tracing::info!("Connecting to database...");
        create_pool_with_options(&database_url, self.max_connections)
            .await
            .context("Failed to connect to database")
    }
}
