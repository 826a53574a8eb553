//! Application service: attach/detach use-cases.
//!
//! A `MembershipSession` owns the load balancer listing fetched once at the
//! start of a command and walks instance identifiers one at a time:
//! resolve, guard, mutate, re-read. A failure for one instance is recorded in
//! its report and never stops the batch.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::application::ports::LoadBalancerGateway;
use crate::application::services::executor;
use crate::domain::{
    InstanceError, InstanceId, Inventory, LoadBalancer, MutationError, MutationOutcome,
    ResolutionError, Target, check_attach, resolve,
};

/// Result of one instance's attach/detach attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceReport {
    pub instance: InstanceId,
    pub result: std::result::Result<MutationOutcome, InstanceError>,
}

impl InstanceReport {
    /// `true` when the requested change was confirmed by the provider.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.as_ref().is_ok_and(MutationOutcome::is_confirmed)
    }
}

/// JSON shape of an `InstanceReport`.
#[derive(Debug, Serialize)]
pub struct InstanceReportView<'a> {
    pub instance: &'a InstanceId,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<&'a MutationOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorView>,
}

/// JSON shape of an `InstanceError`.
#[derive(Debug, Serialize)]
pub struct ErrorView {
    pub code: &'static str,
    pub message: String,
}

impl<'a> From<&'a InstanceReport> for InstanceReportView<'a> {
    fn from(report: &'a InstanceReport) -> Self {
        Self {
            instance: &report.instance,
            success: report.is_success(),
            outcome: report.result.as_ref().ok(),
            error: report.result.as_ref().err().map(|e| ErrorView {
                code: e.code(),
                message: e.to_string(),
            }),
        }
    }
}

/// Command-scoped view of the provider's load balancers.
pub struct MembershipSession<'g, G> {
    gateway: &'g G,
    inventory: Inventory,
}

impl<'g, G: LoadBalancerGateway> MembershipSession<'g, G> {
    /// Fetch the load balancer listing once for this command.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider listing fails.
    pub async fn open(gateway: &'g G) -> Result<Self> {
        let load_balancers = gateway
            .list_load_balancers()
            .await
            .context("cannot list load balancers")?;
        debug!(count = load_balancers.len(), "load balancers fetched");
        Ok(Self::with_inventory(gateway, Inventory::new(load_balancers)))
    }

    /// Start a session over an already-fetched listing.
    #[must_use]
    pub fn with_inventory(gateway: &'g G, inventory: Inventory) -> Self {
        Self { gateway, inventory }
    }

    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Resolve `target` against the current listing.
    ///
    /// # Errors
    ///
    /// Returns the `ResolutionError` describing why no single target exists.
    pub fn resolve(&self, target: &Target) -> Result<&LoadBalancer, ResolutionError> {
        resolve(target, self.inventory.load_balancers())
    }

    /// Attach one instance to the load balancer designated by `target`.
    ///
    /// # Errors
    ///
    /// Returns the resolution, guard, or gateway failure for this instance.
    pub async fn attach(
        &mut self,
        instance: &InstanceId,
        target: &Target,
    ) -> Result<MutationOutcome, InstanceError> {
        let name = self.resolve(target)?.name.clone();

        let current = self.refresh(&name).await?;
        check_attach(&current, instance)?;

        let mutation = executor::attach(self.gateway, &name, instance).await?;
        self.inventory.replace(mutation.snapshot);
        Ok(mutation.outcome)
    }

    /// Detach one instance from whichever load balancer currently holds it.
    ///
    /// # Errors
    ///
    /// Returns the resolution or gateway failure for this instance.
    pub async fn detach(
        &mut self,
        instance: &InstanceId,
    ) -> Result<MutationOutcome, InstanceError> {
        let name = self
            .resolve(&Target::Instance(instance.clone()))?
            .name
            .clone();

        let mutation = executor::detach(self.gateway, &name, instance).await?;
        self.inventory.replace(mutation.snapshot);
        Ok(mutation.outcome)
    }

    /// Attach each instance in order, collecting one report per instance.
    pub async fn attach_all(
        &mut self,
        instances: &[InstanceId],
        target: &Target,
    ) -> Vec<InstanceReport> {
        let mut reports = Vec::with_capacity(instances.len());
        for instance in instances {
            let result = self.attach(instance, target).await;
            reports.push(InstanceReport {
                instance: instance.clone(),
                result,
            });
        }
        reports
    }

    /// Detach each instance in order, collecting one report per instance.
    pub async fn detach_all(&mut self, instances: &[InstanceId]) -> Vec<InstanceReport> {
        let mut reports = Vec::with_capacity(instances.len());
        for instance in instances {
            let result = self.detach(instance).await;
            reports.push(InstanceReport {
                instance: instance.clone(),
                result,
            });
        }
        reports
    }

    /// Re-read `name` before judging a precondition against it.
    async fn refresh(&mut self, name: &str) -> Result<LoadBalancer, InstanceError> {
        match self.gateway.describe_load_balancer(name).await {
            Ok(Some(fresh)) => {
                self.inventory.replace(fresh.clone());
                Ok(fresh)
            }
            Ok(None) => {
                self.inventory.remove(name);
                Err(ResolutionError::LoadBalancerNotFound {
                    target: name.to_string(),
                }
                .into())
            }
            Err(e) => Err(MutationError::Gateway {
                load_balancer: name.to_string(),
                reason: format!("{e:#}"),
            }
            .into()),
        }
    }
}
