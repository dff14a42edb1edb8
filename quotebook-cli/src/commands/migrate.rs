//! Schema setup command

use anyhow::{Context, Result};
use clap::Parser;

use quotebook_server::db::migrations;

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create the categories, authors and messages tables if missing, then exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = args.database.connect().await?;

    migrations::run(&pool)
        .await
        .context("Failed to prepare database schema")?;

    pool.close().await;
    println!("Schema is up to date");
    Ok(())
}
