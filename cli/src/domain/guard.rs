//! Membership preconditions checked before any provider mutation.

use crate::domain::error::GuardError;
use crate::domain::load_balancer::{InstanceId, LoadBalancer};

/// Reject an attach when `instance` is already registered with `lb`.
///
/// # Errors
///
/// Returns `GuardError::InstanceAlreadyAttached` if `lb` already holds `instance`.
pub fn check_attach(lb: &LoadBalancer, instance: &InstanceId) -> Result<(), GuardError> {
    if lb.contains(instance) {
        return Err(GuardError::InstanceAlreadyAttached {
            instance: instance.clone(),
            load_balancer: lb.name.clone(),
        });
    }
    Ok(())
}
