//! Integration tests for configuration failures, reported before any
//! provider call.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FOG: &str = "\
default:
  aws_access_key_id: AKIADEFAULT
  aws_secret_access_key: secret
staging:
  aws_access_key_id: AKIASTAGING
";

/// Command with `ELBA_CONFIG` pointing at a fresh file holding `content`.
fn elba_with_config(content: &str) -> (Command, TempDir) {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join(".fog");
    std::fs::write(&path, content).expect("write config");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("elba"));
    cmd.env("NO_COLOR", "1")
        .env("ELBA_CONFIG", &path)
        .env_remove("ELBA_ENV");
    (cmd, dir)
}

#[test]
fn test_unknown_environment_lists_available_ones() {
    let (mut cmd, _dir) = elba_with_config(FOG);
    cmd.args(["--env", "production", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown environment 'production'"))
        .stderr(predicate::str::contains("default, staging"));
}

#[test]
fn test_environment_read_from_env_var() {
    let (mut cmd, _dir) = elba_with_config(FOG);
    cmd.env("ELBA_ENV", "qa")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown environment 'qa'"));
}

#[test]
fn test_incomplete_credentials_are_rejected() {
    let (mut cmd, _dir) = elba_with_config(FOG);
    cmd.args(["-e", "staging", "detach", "i-001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("aws_secret_access_key is missing"));
}

#[test]
fn test_malformed_config_is_reported() {
    let (mut cmd, _dir) = elba_with_config("default: [unclosed");
    cmd.arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot parse"));
}

#[test]
fn test_json_mode_reports_error_on_stdout() {
    let (mut cmd, _dir) = elba_with_config(FOG);
    let output = cmd
        .args(["--json", "-e", "nope", "attach", "i-001"])
        .output()
        .expect("run elba");

    assert!(!output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json on stdout");
    assert_eq!(doc["error"], true);
    assert!(
        doc["message"]
            .as_str()
            .is_some_and(|m| m.contains("Unknown environment 'nope'"))
    );
}
