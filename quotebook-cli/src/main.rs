//! quotebook CLI - runs the quote service
//!
//! - `serve`: HTTP API for categories, authors and quotes
//! - `migrate`: create the database tables and exit

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use commands::{migrate::MigrateArgs, serve::ServeArgs};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "quotebook",
    author,
    version,
    about = "Store and serve quotes grouped by author and category"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Extra .env file to load after ./.env
    #[arg(long, global = true, value_name = "PATH")]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Create missing database tables
    Migrate(MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // .env first so RUST_LOG from it reaches the filter
    let loaded_from = config::load_dotenv(cli.env_file.as_deref())?;
    tracing_setup::init(&TracingConfig { debug: cli.debug })
        .context("Failed to initialize tracing")?;
    config::log_loaded(&loaded_from);

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
    }
    Ok(())
}
