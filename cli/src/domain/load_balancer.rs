//! Load balancer and instance identifier types.
//!
//! Pure data: snapshots returned by the gateway, held only for the
//! duration of one command.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Prefix every EC2 instance id starts with.
pub const INSTANCE_PREFIX: &str = "i-";

/// Matches strings that designate an instance rather than a load balancer
/// name: anything starting with the instance prefix.
#[allow(clippy::expect_used)] // Static regex literal
pub static INSTANCE_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}", regex::escape(INSTANCE_PREFIX))).expect("valid regex")
});

/// Opaque, provider-defined compute instance identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct InstanceId(String);

impl InstanceId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns `true` when `raw` looks like an instance id (`i-...`).
    #[must_use]
    pub fn is_instance_like(raw: &str) -> bool {
        INSTANCE_ID_RE.is_match(raw)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InstanceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for InstanceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A load balancer snapshot: its name and the instances registered with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadBalancer {
    /// Unique name within the account/region.
    pub name: String,
    /// Registered instances. Order is irrelevant.
    pub instances: BTreeSet<InstanceId>,
}

impl LoadBalancer {
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, instances: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<InstanceId>,
    {
        Self {
            name: name.into(),
            instances: instances.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if `instance` is registered with this load balancer.
    #[must_use]
    pub fn contains(&self, instance: &InstanceId) -> bool {
        self.instances.contains(instance)
    }
}

/// The once-fetched load balancer listing for a single command invocation.
///
/// Never refreshed wholesale; only the snapshot of a load balancer that was
/// just re-read is replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    load_balancers: Vec<LoadBalancer>,
}

impl Inventory {
    #[must_use]
    pub fn new(load_balancers: Vec<LoadBalancer>) -> Self {
        Self { load_balancers }
    }

    #[must_use]
    pub fn load_balancers(&self) -> &[LoadBalancer] {
        &self.load_balancers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.load_balancers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.load_balancers.is_empty()
    }

    /// Replace the snapshot with the same name, keeping listing order.
    ///
    /// A load balancer not present in the listing is appended.
    pub fn replace(&mut self, fresh: LoadBalancer) {
        match self.load_balancers.iter_mut().find(|lb| lb.name == fresh.name) {
            Some(slot) => *slot = fresh,
            None => self.load_balancers.push(fresh),
        }
    }

    /// Drop a load balancer that no longer exists provider-side.
    pub fn remove(&mut self, name: &str) {
        self.load_balancers.retain(|lb| lb.name != name);
    }
}
