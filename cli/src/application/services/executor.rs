//! Application service: membership mutation.
//!
//! One provider call, one re-read, one classified outcome. Provider errors
//! are captured here as `MutationError::Gateway` values so callers can keep
//! going with the next instance.

use tracing::{debug, info, warn};

use crate::application::ports::LoadBalancerGateway;
use crate::domain::{InstanceId, LoadBalancer, MutationError, MutationOutcome, Operation};

/// A confirmed mutation: its outcome and the snapshot it was judged against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub outcome: MutationOutcome,
    /// Fresh state of the load balancer, read after the provider call.
    pub snapshot: LoadBalancer,
}

/// Register `instance` with `load_balancer`, then re-read to confirm.
///
/// # Errors
///
/// Returns `MutationError::Gateway` if the provider call or the re-read fails.
pub async fn attach(
    gateway: &impl LoadBalancerGateway,
    load_balancer: &str,
    instance: &InstanceId,
) -> Result<Mutation, MutationError> {
    debug!(%instance, load_balancer, "registering instance");
    gateway
        .register_instance(load_balancer, instance)
        .await
        .map_err(|e| gateway_failure(load_balancer, Operation::Attach, &e))?;

    let snapshot = reread(gateway, load_balancer).await?;
    let outcome = if snapshot.contains(instance) {
        info!(%instance, load_balancer, "instance attached");
        MutationOutcome::Attached {
            load_balancer: load_balancer.to_string(),
        }
    } else {
        warn!(%instance, load_balancer, "register accepted but instance not in load balancer");
        MutationOutcome::NoEffect {
            operation: Operation::Attach,
            load_balancer: load_balancer.to_string(),
        }
    };
    Ok(Mutation { outcome, snapshot })
}

/// Deregister `instance` from `load_balancer`, then re-read to confirm.
///
/// # Errors
///
/// Returns `MutationError::Gateway` if the provider call or the re-read fails.
pub async fn detach(
    gateway: &impl LoadBalancerGateway,
    load_balancer: &str,
    instance: &InstanceId,
) -> Result<Mutation, MutationError> {
    debug!(%instance, load_balancer, "deregistering instance");
    gateway
        .deregister_instance(load_balancer, instance)
        .await
        .map_err(|e| gateway_failure(load_balancer, Operation::Detach, &e))?;

    let snapshot = reread(gateway, load_balancer).await?;
    let outcome = if snapshot.contains(instance) {
        warn!(%instance, load_balancer, "deregister accepted but instance still in load balancer");
        MutationOutcome::NoEffect {
            operation: Operation::Detach,
            load_balancer: load_balancer.to_string(),
        }
    } else {
        info!(%instance, load_balancer, "instance detached");
        MutationOutcome::Detached {
            load_balancer: load_balancer.to_string(),
        }
    };
    Ok(Mutation { outcome, snapshot })
}

async fn reread(
    gateway: &impl LoadBalancerGateway,
    load_balancer: &str,
) -> Result<LoadBalancer, MutationError> {
    match gateway.describe_load_balancer(load_balancer).await {
        Ok(Some(snapshot)) => Ok(snapshot),
        Ok(None) => Err(MutationError::Gateway {
            load_balancer: load_balancer.to_string(),
            reason: "load balancer no longer exists".to_string(),
        }),
        Err(e) => {
            warn!(load_balancer, error = %e, "re-read failed");
            Err(MutationError::Gateway {
                load_balancer: load_balancer.to_string(),
                reason: format!("{e:#}"),
            })
        }
    }
}

fn gateway_failure(load_balancer: &str, op: Operation, e: &anyhow::Error) -> MutationError {
    warn!(load_balancer, %op, error = %e, "provider call failed");
    MutationError::Gateway {
        load_balancer: load_balancer.to_string(),
        reason: format!("{e:#}"),
    }
}
