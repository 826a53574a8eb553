//! Application context: unified state passed to every command handler.
//!
//! `AppContext` is built once per invocation in `Cli::run()`. It owns the
//! output settings, the configuration store and the selected environment;
//! the provider gateway is connected from it on demand.

use anyhow::Result;

use crate::application::ports::{ConfigStore, TargetPicker};
use crate::application::services::config_service;
use crate::domain::LoadBalancer;
use crate::infra::config::YamlConfigStore;
use crate::infra::elb::ElbGateway;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Skip interactive prompts (also set by `CI` / `ELBA_YES` env vars).
    pub yes: bool,
    /// Configuration environment to load credentials from.
    pub env: String,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext<S = YamlConfigStore> {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Source of credentials and region.
    pub config_store: S,
    /// Configuration environment name.
    pub env: String,
    /// When `true`, never prompt; ambiguous targets are reported as errors.
    ///
    /// Set when `--yes` / `-y` or `--json` is passed, or when the `CI` or
    /// `ELBA_YES` environment variables are present.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &AppFlags) -> Self {
        Self::with_store(flags, YamlConfigStore)
    }
}

impl<S: ConfigStore> AppContext<S> {
    /// Construct an `AppContext` with an explicit configuration store.
    #[must_use]
    pub fn with_store(flags: &AppFlags, config_store: S) -> Self {
        let ci_env = std::env::var("CI").is_ok() || std::env::var("ELBA_YES").is_ok();
        let non_interactive = flags.behaviour.yes || flags.output.json || ci_env;

        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            config_store,
            env: flags.behaviour.env.clone(),
            non_interactive,
        }
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Load the selected environment's settings and connect to ELB.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub async fn gateway(&self) -> Result<ElbGateway> {
        let settings = config_service::connection_settings(&self.config_store, &self.env)?;
        Ok(ElbGateway::connect(&settings).await)
    }
}

impl<S> TargetPicker for AppContext<S> {
    fn can_prompt(&self) -> bool {
        !self.non_interactive
    }

    /// Ask for a candidate index on the terminal, re-asking until it is in range.
    fn pick(&self, candidates: &[LoadBalancer]) -> Result<usize> {
        let last = candidates.len().saturating_sub(1);
        let choice = dialoguer::Input::<usize>::new()
            .with_prompt("Use")
            .validate_with(|index: &usize| -> Result<(), String> {
                if *index <= last {
                    Ok(())
                } else {
                    Err(format!("pick a number between 0 and {last}"))
                }
            })
            .interact_text()?;
        Ok(choice)
    }
}
