//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;

use anyhow::Result;

use crate::domain::{ElbaConfig, InstanceId, LoadBalancer};

// ── Provider Gateway Port ─────────────────────────────────────────────────────

/// Load balancer operations of the cloud provider.
///
/// Implementations perform network I/O and may fail; every method is a
/// single provider round-trip (pagination aside) with no retries.
#[allow(async_fn_in_trait)]
pub trait LoadBalancerGateway {
    /// List every load balancer in the account/region with its members.
    async fn list_load_balancers(&self) -> Result<Vec<LoadBalancer>>;
    /// Re-read one load balancer. `Ok(None)` if it no longer exists.
    async fn describe_load_balancer(&self, name: &str) -> Result<Option<LoadBalancer>>;
    /// Register `instance` with the load balancer `name`.
    async fn register_instance(&self, name: &str, instance: &InstanceId) -> Result<()>;
    /// Deregister `instance` from the load balancer `name`.
    async fn deregister_instance(&self, name: &str, instance: &InstanceId) -> Result<()>;
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts loading of the credentials/region configuration file.
pub trait ConfigStore {
    /// Load the configuration, or `None` when no configuration file exists.
    fn load(&self) -> Result<Option<ElbaConfig>>;
    /// Location of the configuration file.
    fn path(&self) -> Result<PathBuf>;
}

// ── Disambiguation Port ───────────────────────────────────────────────────────

/// Asks the user to pick one load balancer among several candidates.
pub trait TargetPicker {
    /// Whether the user can be asked at all (interactive session).
    fn can_prompt(&self) -> bool;

    /// Return the index of the chosen candidate.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt itself fails (e.g. no TTY).
    fn pick(&self, candidates: &[LoadBalancer]) -> Result<usize>;
}
