//! Command implementations

pub mod attach;
pub mod detach;
pub mod list;

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::{ConfigStore, LoadBalancerGateway};
use crate::application::services::membership::{InstanceReport, MembershipSession};
use crate::output::progress;

/// Fetch the load balancer listing once for this command, with a spinner.
///
/// # Errors
///
/// Returns an error if the provider listing fails.
pub async fn open_session<'g, G: LoadBalancerGateway>(
    app: &AppContext<impl ConfigStore>,
    gateway: &'g G,
) -> Result<MembershipSession<'g, G>> {
    let spinner = app.output.spinner("Fetching load balancers...");
    let opened = MembershipSession::open(gateway).await;
    if let Some(pb) = &spinner {
        progress::finish_clear(pb);
    }
    opened
}

/// `SUCCESS` only when every instance operation was confirmed.
#[must_use]
pub fn exit_code(reports: &[InstanceReport]) -> ExitCode {
    if reports.iter().all(InstanceReport::is_success) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
