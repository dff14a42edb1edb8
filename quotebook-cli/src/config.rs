//! Environment and connection configuration
//!
//! The database connection string (DSN) comes from, in order:
//! 1. `--database-url`
//! 2. `DSN` environment variable
//! 3. `DATABASE_URL` environment variable
//!
//! `.env` files only fill in variables that are not already set.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

/// Environment variables checked for the DSN, highest priority first
pub const DSN_VARS: [&str; 2] = ["DSN", "DATABASE_URL"];

/// Load `.env` from the current directory, then `extra` if given.
///
/// Runs before tracing is initialized so `RUST_LOG` may come from a `.env`
/// file; the returned paths are logged by the caller once tracing is up.
/// A missing `./.env` is fine; a missing or unreadable `extra` is an error
/// because the user asked for it explicitly.
pub fn load_dotenv(extra: Option<&Path>) -> Result<Vec<PathBuf>> {
    let mut loaded_from = Vec::new();

    match dotenvy::dotenv() {
        Ok(path) => loaded_from.push(path),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e).context("Failed to parse .env in current directory"),
    }

    if let Some(path) = extra {
        dotenvy::from_path(path)
            .with_context(|| format!("Failed to load env file {}", path.display()))?;
        loaded_from.push(path.to_path_buf());
    }

    Ok(loaded_from)
}

/// Report which `.env` files were applied.
pub fn log_loaded(loaded_from: &[PathBuf]) {
    if loaded_from.is_empty() {
        info!("Using environment variables only (no .env file found)");
        return;
    }

    for path in loaded_from {
        debug!("Loaded env file: {}", path.display());
    }
    let joined: Vec<String> = loaded_from.iter().map(|p| p.display().to_string()).collect();
    info!("Loaded configuration from: {}", joined.join(", "));
}

/// Resolve the DSN from the flag or the process environment.
pub fn resolve_database_url(flag: Option<String>) -> Result<String> {
    resolve_with(flag, |key| std::env::var(key).ok())
}

fn resolve_with(flag: Option<String>, lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
    let found = flag
        .into_iter()
        .chain(DSN_VARS.iter().filter_map(|key| lookup(key)))
        .map(|value| value.trim().to_owned())
        .find(|value| !value.is_empty());

    match found {
        Some(url) => Ok(url),
        None => bail!(
            "database connection string not set. Set via --database-url, DSN or DATABASE_URL (env or .env)"
        ),
    }
}
