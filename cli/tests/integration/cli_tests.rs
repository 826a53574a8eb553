//! Integration tests for the CLI surface and argument parsing.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn elba() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("elba"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    elba().assert().code(2).stderr(predicate::str::contains(
        "Attach and detach EC2 instances from Elastic Load Balancers",
    ));
}

#[test]
fn test_cli_help_lists_commands() {
    elba()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("attach"))
        .stdout(predicate::str::contains("detach"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    elba()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            "elba ",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_unknown_command_fails() {
    elba()
        .arg("frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// --- Subcommand arguments ---

#[test]
fn test_attach_requires_an_instance() {
    elba()
        .arg("attach")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<INSTANCE>..."));
}

#[test]
fn test_detach_requires_an_instance() {
    elba()
        .arg("detach")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<INSTANCE>..."));
}

#[test]
fn test_attach_help_documents_to_flag() {
    elba()
        .args(["attach", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--to <ELB>"));
}

#[test]
fn test_list_help_documents_instances_flag() {
    elba()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--instances"));
}

#[test]
fn test_to_flag_requires_value() {
    elba()
        .args(["attach", "i-001", "--to"])
        .assert()
        .code(2);
}
