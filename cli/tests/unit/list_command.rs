//! Unit tests for `elba list`.

#![allow(clippy::expect_used)]

use std::process::ExitCode;

use elba_cli::commands::list::{self, ListArgs};

use crate::helpers::{json_app, quiet_app};
use crate::mocks::{FakeGateway, lb};

#[tokio::test]
async fn test_list_returns_success() {
    let gateway = FakeGateway::new(vec![lb("prod-a", &["i-001"]), lb("prod-b", &[])]);

    let code = list::run(&quiet_app(), &gateway, &ListArgs { instances: true })
        .await
        .expect("run");

    assert_eq!(code, ExitCode::SUCCESS);
}

#[tokio::test]
async fn test_list_empty_account_is_not_an_error() {
    let gateway = FakeGateway::new(vec![]);

    let code = list::run(&json_app(), &gateway, &ListArgs::default())
        .await
        .expect("run");

    assert_eq!(code, ExitCode::SUCCESS);
}

#[tokio::test]
async fn test_list_is_read_only() {
    let gateway = FakeGateway::new(vec![lb("prod-a", &["i-001"])]);

    list::run(&quiet_app(), &gateway, &ListArgs { instances: true })
        .await
        .expect("run");

    assert_eq!(gateway.calls(), vec!["list"]);
}

#[tokio::test]
async fn test_list_propagates_provider_failure() {
    let gateway = FakeGateway::new(vec![]).failing_list();

    let err = list::run(&quiet_app(), &gateway, &ListArgs::default())
        .await
        .expect_err("listing failed");

    assert!(format!("{err:#}").contains("cannot list load balancers"));
}
