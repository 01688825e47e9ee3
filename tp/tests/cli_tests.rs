//! CLI integration tests
//!
//! These exercise argument handling and the validation paths that fail
//! before any network call; nothing here talks to an inference endpoint.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Build a `tp` command isolated from the host environment
///
/// Runs in a scratch directory (so no `.tripplan.yml` is picked up) and
/// with the default API key env var cleared.
fn tp(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tp").expect("tp binary builds");
    cmd.current_dir(dir.path());
    cmd.env_remove("HF_TOKEN");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    tp(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("stays"))
        .stdout(predicate::str::contains("travel"))
        .stdout(predicate::str::contains("interests"));
}

#[test]
fn test_interests_lists_catalog() {
    let dir = TempDir::new().unwrap();
    tp(&dir)
        .arg("interests")
        .assert()
        .success()
        .stdout(predicate::str::contains("Adventure"))
        .stdout(predicate::str::contains("Budget Travel"));
}

#[test]
fn test_plan_requires_destination() {
    let dir = TempDir::new().unwrap();
    tp(&dir)
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_plan_rejects_blank_destination() {
    let dir = TempDir::new().unwrap();
    tp(&dir)
        .args(["plan", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("destination"));
}

#[test]
fn test_plan_rejects_bad_day_count() {
    let dir = TempDir::new().unwrap();
    tp(&dir)
        .args(["plan", "Goa", "--days", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 30"));

    tp(&dir)
        .args(["plan", "Goa", "--days", "31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 30"));
}

#[test]
fn test_plan_rejects_small_budget() {
    let dir = TempDir::new().unwrap();
    tp(&dir)
        .args(["plan", "Goa", "--budget", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1000"));
}

#[test]
fn test_plan_rejects_unknown_interest() {
    let dir = TempDir::new().unwrap();
    tp(&dir)
        .args(["plan", "Goa", "--interest", "Quidditch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown interest 'Quidditch'"));
}

#[test]
fn test_plan_all_conflicts_with_interest_tags() {
    let dir = TempDir::new().unwrap();
    tp(&dir)
        .args(["plan", "Goa", "--all", "--interest", "Food"])
        .assert()
        .failure();
}

#[test]
fn test_plan_without_api_key_fails_before_network() {
    let dir = TempDir::new().unwrap();
    tp(&dir)
        .args(["plan", "Goa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key not found"))
        .stderr(predicate::str::contains("HF_TOKEN"));
}

#[test]
fn test_explicit_missing_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    tp(&dir)
        .args(["--config", "/nonexistent/tripplan.yml", "interests"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_config_file_controls_api_key_env() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("tripplan.yml");
    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(file, "llm:\n  api-key-env: TRIPPLAN_CUSTOM_KEY").unwrap();

    tp(&dir)
        .args(["--config", "tripplan.yml", "plan", "Goa"])
        .env_remove("TRIPPLAN_CUSTOM_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TRIPPLAN_CUSTOM_KEY"));
}
