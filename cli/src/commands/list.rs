//! `elba list [--instances]`: print the available load balancers.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::{ConfigStore, LoadBalancerGateway};
use crate::commands::open_session;

/// Arguments for the list command.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Print the instance ids attached to each load balancer
    #[arg(short, long)]
    pub instances: bool,
}

/// Run `elba list`.
///
/// # Errors
///
/// Returns an error if the load balancers cannot be listed.
pub async fn run(
    app: &AppContext<impl ConfigStore>,
    gateway: &impl LoadBalancerGateway,
    args: &ListArgs,
) -> Result<ExitCode> {
    let session = open_session(app, gateway).await?;
    app.renderer()
        .render_listing(session.inventory().load_balancers(), args.instances)?;
    Ok(ExitCode::SUCCESS)
}
