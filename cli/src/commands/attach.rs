//! `elba attach <INSTANCE>... [--to <ELB>]`: register instances with a load balancer.

use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::{ConfigStore, LoadBalancerGateway, TargetPicker};
use crate::application::services::membership::MembershipSession;
use crate::commands::{exit_code, open_session};
use crate::domain::{InstanceId, Operation, ResolutionError, Target};

/// Arguments for the attach command.
#[derive(Args, Debug)]
pub struct AttachArgs {
    /// Instance ids to attach
    #[arg(required = true, value_name = "INSTANCE")]
    pub instances: Vec<String>,

    /// Load balancer to use: full or partial name, or an instance id already
    /// attached to it
    #[arg(short, long, value_name = "ELB")]
    pub to: Option<String>,
}

/// Run `elba attach`.
///
/// Without `--to`, a single load balancer is used as the default and several
/// load balancers trigger an indexed prompt.
///
/// # Errors
///
/// Returns an error if the load balancers cannot be listed or the prompt fails.
pub async fn run(
    app: &AppContext<impl ConfigStore>,
    gateway: &impl LoadBalancerGateway,
    picker: &impl TargetPicker,
    args: &AttachArgs,
) -> Result<ExitCode> {
    let instances: Vec<InstanceId> = args
        .instances
        .iter()
        .map(|s| InstanceId::new(s.as_str()))
        .collect();

    let mut session = open_session(app, gateway).await?;
    let target = choose_target(app, &session, picker, Target::parse(args.to.as_deref()))?;
    let reports = session.attach_all(&instances, &target).await;

    app.renderer().render_reports(Operation::Attach, &reports)?;
    Ok(exit_code(&reports))
}

/// Settle the target once for the whole batch.
///
/// Ambiguity is resolved by showing the candidates, asking for an index and
/// resolving again with the chosen name. Other resolution failures are left
/// for the per-instance reports.
///
/// # Errors
///
/// Returns an error if the prompt fails or yields an index out of range.
pub fn choose_target<G: LoadBalancerGateway>(
    app: &AppContext<impl ConfigStore>,
    session: &MembershipSession<'_, G>,
    picker: &impl TargetPicker,
    mut target: Target,
) -> Result<Target> {
    loop {
        match session.resolve(&target) {
            Ok(lb) => {
                if target == Target::Unspecified {
                    app.renderer().render_default_target(lb);
                }
                return Ok(Target::Exact(lb.name.clone()));
            }
            Err(ResolutionError::MultipleLoadBalancersAvailable { candidates }) => {
                if !picker.can_prompt() {
                    return Ok(target);
                }
                app.renderer().render_candidates(&candidates);
                let index = picker.pick(&candidates)?;
                let Some(chosen) = candidates.get(index) else {
                    bail!(
                        "invalid choice {index}: pick a number between 0 and {}",
                        candidates.len() - 1
                    );
                };
                target = Target::Exact(chosen.name.clone());
            }
            Err(_) => return Ok(target),
        }
    }
}
