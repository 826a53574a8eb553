//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod styles;

use anyhow::Result;
use console::Term;
use indicatif::ProgressBar;
use owo_colors::OwoColorize as _;

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use styles::Styles;

use crate::application::services::membership::InstanceReport;
use crate::domain::{LoadBalancer, Operation};

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        Self {
            styles: Styles::for_terminal(use_colors),
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Start a spinner when progress indicators are enabled.
    #[must_use]
    pub fn spinner(&self, msg: &str) -> Option<ProgressBar> {
        self.show_progress().then(|| progress::spinner(msg))
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }
}

/// Renders command results in the mode selected on the command line.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render the load balancer listing.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_listing(
        &self,
        load_balancers: &[LoadBalancer],
        with_instances: bool,
    ) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_listing(load_balancers, with_instances);
                Ok(())
            }
            Self::Json(r) => r.render_listing(load_balancers, with_instances),
        }
    }

    /// Announce the load balancer picked without asking.
    pub fn render_default_target(&self, lb: &LoadBalancer) {
        if let Self::Human(r) = self {
            r.render_default_target(lb);
        }
    }

    /// Show the indexed list of candidates before asking for a choice.
    pub fn render_candidates(&self, candidates: &[LoadBalancer]) {
        if let Self::Human(r) = self {
            r.render_candidates(candidates);
        }
    }

    /// Render per-instance results of an attach/detach batch.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_reports(&self, op: Operation, reports: &[InstanceReport]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_reports(op, reports);
                Ok(())
            }
            Self::Json(r) => r.render_reports(op, reports),
        }
    }
}
