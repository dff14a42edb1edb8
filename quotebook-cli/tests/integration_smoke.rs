//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("quotebook").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Port to listen on"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_migrate_help() {
    let mut cmd = Command::cargo_bin("quotebook").unwrap();
    cmd.arg("migrate").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--max-connections"));
}

#[test]
fn test_missing_dsn_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("quotebook").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("DSN")
        .env_remove("DATABASE_URL")
        .arg("migrate");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("database connection string not set"));
}

#[test]
fn test_missing_env_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("quotebook").unwrap();
    cmd.current_dir(dir.path())
        .arg("--env-file")
        .arg(dir.path().join("nope.env"))
        .arg("migrate");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load env file"));
}

#[test]
fn test_rust_log_from_dotenv_applies() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".env"), "RUST_LOG=debug\n").unwrap();

    let mut cmd = Command::cargo_bin("quotebook").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("DSN")
        .env_remove("DATABASE_URL")
        .arg("migrate");

    // debug-level line only shows up if the .env filter was in place
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Loaded env file"));
}
