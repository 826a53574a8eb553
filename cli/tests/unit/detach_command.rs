//! Unit tests for `elba detach`.

#![allow(clippy::expect_used)]

use std::process::ExitCode;

use elba_cli::commands::detach::{self, DetachArgs};

use crate::helpers::{json_app, quiet_app};
use crate::mocks::{Behaviour, FakeGateway, lb};

fn args(instances: &[&str]) -> DetachArgs {
    DetachArgs {
        instances: instances.iter().map(ToString::to_string).collect(),
    }
}

#[tokio::test]
async fn test_detach_from_each_holding_load_balancer() {
    let gateway = FakeGateway::new(vec![lb("prod-a", &["i-001"]), lb("prod-b", &["i-002"])]);

    let code = detach::run(&quiet_app(), &gateway, &args(&["i-001", "i-002"]))
        .await
        .expect("run");

    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(
        gateway.mutation_calls(),
        vec!["deregister prod-a i-001", "deregister prod-b i-002"]
    );
}

#[tokio::test]
async fn test_detach_unknown_instance_exits_nonzero() {
    let gateway = FakeGateway::new(vec![lb("prod-a", &["i-001"])]);

    let code = detach::run(&quiet_app(), &gateway, &args(&["i-404", "i-001"]))
        .await
        .expect("run");

    assert_eq!(code, ExitCode::FAILURE);
    assert_eq!(gateway.mutation_calls(), vec!["deregister prod-a i-001"]);
}

#[tokio::test]
async fn test_detach_still_present_exits_nonzero() {
    let gateway =
        FakeGateway::new(vec![lb("prod-a", &["i-001"])]).with_mutations(Behaviour::Ignore);

    let code = detach::run(&quiet_app(), &gateway, &args(&["i-001"]))
        .await
        .expect("run");

    assert_eq!(code, ExitCode::FAILURE);
}

#[tokio::test]
async fn test_detach_json_mode_returns_ok() {
    let gateway = FakeGateway::new(vec![lb("prod-a", &["i-001"])]);

    let code = detach::run(&json_app(), &gateway, &args(&["i-001"]))
        .await
        .expect("run");

    assert_eq!(code, ExitCode::SUCCESS);
}
