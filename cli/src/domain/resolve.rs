//! Target load balancer resolution.
//!
//! Pure functions only: resolution works on an already-fetched listing
//! and never talks to the provider.

use crate::domain::error::ResolutionError;
use crate::domain::load_balancer::{InstanceId, LoadBalancer};

/// What the caller asked to operate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// No load balancer was given.
    Unspecified,
    /// A full or partial load balancer name.
    Name(String),
    /// A load balancer already settled by name; never matched as a substring.
    Exact(String),
    /// Whichever load balancer currently holds this instance.
    Instance(InstanceId),
}

impl Target {
    /// Classify a raw user-supplied hint.
    ///
    /// Absent or blank input is `Unspecified`; input matching the instance id
    /// pattern designates an instance; anything else is a name hint.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::Unspecified,
            Some(s) if InstanceId::is_instance_like(s) => Self::Instance(InstanceId::new(s)),
            Some(s) => Self::Name(s.to_string()),
        }
    }
}

/// Resolve `target` to exactly one load balancer in `load_balancers`.
///
/// Name hints prefer an exact name match, then fall back to the first load
/// balancer (in listing order) whose name contains the hint. `Exact` targets
/// match the full name only.
///
/// # Errors
///
/// - `LoadBalancerNotFound` when a name or instance matches nothing.
/// - `NoLoadBalancerAvailable` when no target is given and the listing is empty.
/// - `MultipleLoadBalancersAvailable` when no target is given and the
///   listing holds more than one load balancer; carries the whole listing.
pub fn resolve<'a>(
    target: &Target,
    load_balancers: &'a [LoadBalancer],
) -> Result<&'a LoadBalancer, ResolutionError> {
    match target {
        Target::Instance(instance) => load_balancers
            .iter()
            .find(|lb| lb.contains(instance))
            .ok_or_else(|| ResolutionError::LoadBalancerNotFound {
                target: instance.to_string(),
            }),
        Target::Name(hint) => find_by_name(hint, load_balancers).ok_or_else(|| {
            ResolutionError::LoadBalancerNotFound {
                target: hint.clone(),
            }
        }),
        Target::Exact(name) => load_balancers
            .iter()
            .find(|lb| lb.name == *name)
            .ok_or_else(|| ResolutionError::LoadBalancerNotFound {
                target: name.clone(),
            }),
        Target::Unspecified => match load_balancers {
            [] => Err(ResolutionError::NoLoadBalancerAvailable),
            [only] => Ok(only),
            many => Err(ResolutionError::MultipleLoadBalancersAvailable {
                candidates: many.to_vec(),
            }),
        },
    }
}

fn find_by_name<'a>(hint: &str, load_balancers: &'a [LoadBalancer]) -> Option<&'a LoadBalancer> {
    load_balancers
        .iter()
        .find(|lb| lb.name == hint)
        .or_else(|| load_balancers.iter().find(|lb| lb.name.contains(hint)))
}
