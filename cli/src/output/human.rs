//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::application::services::membership::InstanceReport;
use crate::domain::{
    GuardError, InstanceError, LoadBalancer, MutationError, MutationOutcome, Operation,
    ResolutionError,
};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render `N ELB found:` followed by one line per load balancer.
    pub fn render_listing(&self, load_balancers: &[LoadBalancer], with_instances: bool) {
        if self.ctx.quiet {
            return;
        }
        println!("{} ELB found:", load_balancers.len());
        for lb in load_balancers {
            println!(" * {}", lb.name.style(self.ctx.styles.load_balancer));
            if with_instances {
                for instance in &lb.instances {
                    println!("   - {}", instance.style(self.ctx.styles.instance));
                }
            }
        }
    }

    pub fn render_default_target(&self, lb: &LoadBalancer) {
        self.ctx.warn(&format!("Using default load balancer: {}", lb.name));
    }

    /// Render the indexed candidate table shown before the numeric prompt.
    pub fn render_candidates(&self, candidates: &[LoadBalancer]) {
        self.ctx.warn("More than one ELB available, pick one in the list");
        for line in candidate_table(candidates) {
            println!("{line}");
        }
    }

    pub fn render_reports(&self, op: Operation, reports: &[InstanceReport]) {
        for report in reports {
            let msg = report_message(op, report);
            match msg.tone {
                Tone::Success => self.ctx.success(&msg.text),
                Tone::Warning => self.ctx.warn(&msg.text),
                Tone::Error => self.ctx.error(&msg.text),
            }
            if let Some(reason) = msg.reason {
                self.ctx.warn(&format!("Reason: {reason}"));
            }
        }

        if reports.len() > 1 && !self.ctx.quiet {
            let done = reports.iter().filter(|r| r.is_success()).count();
            println!();
            println!(
                "  {}",
                format!("{done} of {} instances {}", reports.len(), past_tense(op))
                    .style(self.ctx.styles.dim)
            );
        }
    }
}

// ── Display helpers (used by tests and output layer) ─────────────────────────

/// How a per-instance message is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
}

/// A formatted per-instance message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMessage {
    pub tone: Tone,
    pub text: String,
    pub reason: Option<String>,
}

#[must_use]
pub fn past_tense(op: Operation) -> &'static str {
    match op {
        Operation::Attach => "attached",
        Operation::Detach => "detached",
    }
}

/// `0  name` rows, indices right-aligned to the widest index.
#[must_use]
pub fn candidate_table(candidates: &[LoadBalancer]) -> Vec<String> {
    let width = candidates.len().saturating_sub(1).to_string().len();
    candidates
        .iter()
        .enumerate()
        .map(|(i, lb)| format!("{i:>width$}  {}", lb.name))
        .collect()
}

/// Turn one instance's result into the line shown to the user.
#[must_use]
pub fn report_message(op: Operation, report: &InstanceReport) -> ReportMessage {
    let instance = &report.instance;
    let (tone, text, reason) = match &report.result {
        Ok(MutationOutcome::Attached { load_balancer }) => (
            Tone::Success,
            format!("{instance} successfully attached to {load_balancer}"),
            None,
        ),
        Ok(MutationOutcome::Detached { load_balancer }) => (
            Tone::Success,
            format!("{instance} successfully detached from {load_balancer}"),
            None,
        ),
        Ok(MutationOutcome::NoEffect {
            operation: Operation::Attach,
            load_balancer,
        }) => (
            Tone::Error,
            format!("Unable to attach {instance} to {load_balancer}"),
            Some("instance not registered after the call".to_string()),
        ),
        Ok(MutationOutcome::NoEffect {
            operation: Operation::Detach,
            load_balancer,
        }) => (
            Tone::Error,
            format!("Unable to detach {instance} from {load_balancer}"),
            Some("instance still registered after the call".to_string()),
        ),
        Err(InstanceError::Guard(GuardError::InstanceAlreadyAttached { load_balancer, .. })) => (
            Tone::Warning,
            format!("{instance} is already attached to {load_balancer}"),
            None,
        ),
        Err(InstanceError::Resolution(ResolutionError::LoadBalancerNotFound { target })) => {
            match op {
                Operation::Detach => (
                    Tone::Warning,
                    format!("Unable to find an ELB for {instance}"),
                    None,
                ),
                Operation::Attach => (Tone::Error, format!("ELB not found: {target}"), None),
            }
        }
        Err(InstanceError::Resolution(ResolutionError::NoLoadBalancerAvailable)) => {
            (Tone::Error, "No load balancer available".to_string(), None)
        }
        Err(InstanceError::Resolution(ResolutionError::MultipleLoadBalancersAvailable {
            ..
        })) => (
            Tone::Warning,
            format!("You must specify an ELB for {instance} (--to)"),
            None,
        ),
        Err(InstanceError::Mutation(MutationError::Gateway {
            load_balancer,
            reason,
        })) => {
            let text = match op {
                Operation::Attach => format!("Unable to attach {instance} to {load_balancer}"),
                Operation::Detach => format!("Unable to detach {instance} from {load_balancer}"),
            };
            (Tone::Error, text, Some(reason.clone()))
        }
    };
    ReportMessage { tone, text, reason }
}
