//! Integration tests for the repo-catalog CLI
//!
//! These tests run the compiled binary and check its observable behavior
//! without binding a network port.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper function to create a repo-catalog command
fn repo_catalog() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("repo-catalog"))
}

// =============================================================================
// VERSION / HELP
// =============================================================================

#[test]
fn test_version_command() {
    repo_catalog()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "repo-catalog v{}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_json() {
    let output = repo_catalog().args(["--json", "version"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_no_command_prints_hint() {
    repo_catalog()
        .assert()
        .success()
        .stdout(predicate::str::contains("repo-catalog serve"));
}

#[test]
fn test_help_lists_serve() {
    repo_catalog()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("version"));
}

#[test]
fn test_serve_help_lists_flags() {
    repo_catalog()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--host"));
}

// =============================================================================
// STARTUP FAILURES
// =============================================================================

#[test]
fn test_serve_with_missing_config_fails() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");

    repo_catalog()
        .args(["serve", "--config"])
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_serve_with_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("repo-catalog.toml");
    fs::write(&path, "[server]\nport = \"not a number\"\n").unwrap();

    // Picked up from the working directory without --config
    repo_catalog()
        .arg("serve")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_serve_rejects_invalid_port() {
    repo_catalog()
        .args(["serve", "--port", "70000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("70000"));
}
