//! `elba detach <INSTANCE>...`: remove instances from their load balancer.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::{ConfigStore, LoadBalancerGateway};
use crate::commands::{exit_code, open_session};
use crate::domain::{InstanceId, Operation};

/// Arguments for the detach command.
#[derive(Args, Debug)]
pub struct DetachArgs {
    /// Instance ids to detach from whichever load balancer holds them
    #[arg(required = true, value_name = "INSTANCE")]
    pub instances: Vec<String>,
}

/// Run `elba detach`.
///
/// Each instance is looked up in the listing independently; one failure
/// does not stop the others.
///
/// # Errors
///
/// Returns an error if the load balancers cannot be listed.
pub async fn run(
    app: &AppContext<impl ConfigStore>,
    gateway: &impl LoadBalancerGateway,
    args: &DetachArgs,
) -> Result<ExitCode> {
    let instances: Vec<InstanceId> = args
        .instances
        .iter()
        .map(|s| InstanceId::new(s.as_str()))
        .collect();

    let mut session = open_session(app, gateway).await?;
    let reports = session.detach_all(&instances).await;

    app.renderer().render_reports(Operation::Detach, &reports)?;
    Ok(exit_code(&reports))
}
