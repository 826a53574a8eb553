//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;
use crate::domain::config::DEFAULT_ENVIRONMENT;

/// Attach and detach EC2 instances from Elastic Load Balancers
#[derive(Parser)]
#[command(
    name = "elba",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format (implies --yes)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Never prompt; fail instead when a load balancer must be chosen
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Configuration environment to read credentials from
    #[arg(short, long, global = true, env = "ELBA_ENV", default_value = DEFAULT_ENVIRONMENT)]
    pub env: String,

    /// Log provider calls to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the list of available load balancers
    List(commands::list::ListArgs),

    /// Attach instances to a load balancer
    Attach(commands::attach::AttachArgs),

    /// Detach instances from their load balancer
    Detach(commands::detach::DetachArgs),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or the initial listing fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            yes,
            env,
            verbose: _,
            command,
        } = self;

        let app = AppContext::new(&AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            behaviour: BehaviourFlags { yes, env },
        });
        let gateway = app.gateway().await?;

        match command {
            Command::List(args) => commands::list::run(&app, &gateway, &args).await,
            Command::Attach(args) => commands::attach::run(&app, &gateway, &app, &args).await,
            Command::Detach(args) => commands::detach::run(&app, &gateway, &args).await,
        }
    }
}
