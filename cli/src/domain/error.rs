//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or the AWS SDK. All error types implement
//! `thiserror::Error` and convert to `anyhow::Error` via the `?` operator.

use thiserror::Error;

use crate::domain::load_balancer::{InstanceId, LoadBalancer};

// ── Resolution errors ─────────────────────────────────────────────────────────

/// Why a target load balancer could not be determined.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("No load balancer available")]
    NoLoadBalancerAvailable,

    #[error("More than one ELB available ({}), specify one with --to", .candidates.len())]
    MultipleLoadBalancersAvailable { candidates: Vec<LoadBalancer> },

    #[error("ELB not found: {target}")]
    LoadBalancerNotFound { target: String },
}

// ── Guard errors ──────────────────────────────────────────────────────────────

/// A membership precondition that does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    #[error("{instance} is already attached to {load_balancer}")]
    InstanceAlreadyAttached {
        instance: InstanceId,
        load_balancer: String,
    },
}

// ── Mutation errors ───────────────────────────────────────────────────────────

/// A provider-level failure captured at the mutation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("{load_balancer}: {reason}")]
    Gateway {
        load_balancer: String,
        reason: String,
    },
}

// ── Per-instance errors ───────────────────────────────────────────────────────

/// Everything that can stop a single instance's attach/detach attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Guard(#[from] GuardError),

    #[error(transparent)]
    Mutation(#[from] MutationError),
}

impl InstanceError {
    /// Stable machine-readable code, used by `--json` output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Resolution(ResolutionError::NoLoadBalancerAvailable) => {
                "no_load_balancer_available"
            }
            Self::Resolution(ResolutionError::MultipleLoadBalancersAvailable { .. }) => {
                "multiple_load_balancers_available"
            }
            Self::Resolution(ResolutionError::LoadBalancerNotFound { .. }) => {
                "load_balancer_not_found"
            }
            Self::Guard(GuardError::InstanceAlreadyAttached { .. }) => "instance_already_attached",
            Self::Mutation(MutationError::Gateway { .. }) => "gateway_error",
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to the credentials/region configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown environment '{env}' in {path}\n\nAvailable environments: {available}")]
    UnknownEnvironment {
        env: String,
        path: String,
        available: String,
    },

    #[error("Incomplete credentials for environment '{env}': {missing} is missing")]
    IncompleteCredentials { env: String, missing: &'static str },
}
