//! Classified result of a single attach/detach.

use std::fmt;

use serde::Serialize;

/// Which membership change was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Attach,
    Detach,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Attach => "attach",
            Self::Detach => "detach",
        })
    }
}

/// What the provider's state looks like after a mutation, as confirmed by a
/// re-read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MutationOutcome {
    /// The instance is now registered with `load_balancer`.
    Attached { load_balancer: String },
    /// The instance is no longer registered with `load_balancer`.
    Detached { load_balancer: String },
    /// The provider accepted the call but membership did not change.
    NoEffect {
        operation: Operation,
        load_balancer: String,
    },
}

impl MutationOutcome {
    /// `true` when the requested change is confirmed.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        !matches!(self, Self::NoEffect { .. })
    }

    #[must_use]
    pub fn load_balancer(&self) -> &str {
        match self {
            Self::Attached { load_balancer }
            | Self::Detached { load_balancer }
            | Self::NoEffect { load_balancer, .. } => load_balancer,
        }
    }
}
