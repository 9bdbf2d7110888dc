//! Smoke tests for the binary surface.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("wkc-cli").expect("binary not built");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("work-code"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("wkc-cli").expect("binary not built");
    cmd.arg("frobnicate").assert().failure();
}

#[test]
fn config_show_works_with_isolated_config_dir() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let mut cmd = Command::cargo_bin("wkc-cli").expect("binary not built");
    cmd.arg("--config-dir")
        .arg(temp_dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Configuration"));
}

#[test]
fn config_set_persists_value() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let mut cmd = Command::cargo_bin("wkc-cli").expect("binary not built");
    cmd.arg("--config-dir")
        .arg(temp_dir.path())
        .args(["config", "set", "api_url", "http://workcodes.test"])
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("wkc-cli").expect("binary not built");
    cmd.arg("--config-dir")
        .arg(temp_dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://workcodes.test"));
}

#[test]
fn config_set_rejects_malformed_url() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let mut cmd = Command::cargo_bin("wkc-cli").expect("binary not built");
    cmd.arg("--config-dir")
        .arg(temp_dir.path())
        .args(["config", "set", "api_url", "not-a-url"])
        .assert()
        .failure();
}
