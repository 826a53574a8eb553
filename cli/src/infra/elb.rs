//! AWS Elastic Load Balancing (classic) implementation of the
//! `LoadBalancerGateway` port.

use anyhow::{Result, anyhow};
use aws_config::BehaviorVersion;
use aws_sdk_elasticloadbalancing::Client;
use aws_sdk_elasticloadbalancing::config::{Credentials, Region};
use aws_sdk_elasticloadbalancing::error::DisplayErrorContext;
use aws_sdk_elasticloadbalancing::types::{Instance, LoadBalancerDescription};
use tracing::debug;

use crate::application::ports::LoadBalancerGateway;
use crate::domain::{ConnectionSettings, InstanceId, LoadBalancer};

/// Name reported by the static credentials provider built from `~/.fog`.
const CREDENTIALS_PROVIDER: &str = "elba-config";

/// Gateway talking to the ELB API of one region.
pub struct ElbGateway {
    client: Client,
}

impl ElbGateway {
    /// Build an ELB client from the selected configuration profile.
    pub async fn connect(settings: &ConnectionSettings) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()));
        if let Some(creds) = &settings.credentials {
            loader = loader.credentials_provider(Credentials::new(
                creds.access_key_id.clone(),
                creds.secret_access_key.clone(),
                creds.session_token.clone(),
                None,
                CREDENTIALS_PROVIDER,
            ));
        }
        let config = loader.load().await;
        debug!(region = %settings.region, "ELB client configured");
        Self {
            client: Client::new(&config),
        }
    }
}

impl LoadBalancerGateway for ElbGateway {
    async fn list_load_balancers(&self) -> Result<Vec<LoadBalancer>> {
        let mut load_balancers = Vec::new();
        let mut marker: Option<String> = None;
        loop {
            let page = self
                .client
                .describe_load_balancers()
                .set_marker(marker.take())
                .send()
                .await
                .map_err(|e| anyhow!("DescribeLoadBalancers failed: {}", DisplayErrorContext(e)))?;

            load_balancers.extend(
                page.load_balancer_descriptions()
                    .iter()
                    .filter_map(to_load_balancer),
            );

            match page.next_marker() {
                Some(next) if !next.is_empty() => marker = Some(next.to_string()),
                _ => break,
            }
        }
        Ok(load_balancers)
    }

    async fn describe_load_balancer(&self, name: &str) -> Result<Option<LoadBalancer>> {
        let result = self
            .client
            .describe_load_balancers()
            .load_balancer_names(name)
            .send()
            .await;

        match result {
            Ok(output) => Ok(output
                .load_balancer_descriptions()
                .iter()
                .filter_map(to_load_balancer)
                .find(|lb| lb.name == name)),
            Err(e)
                if e.as_service_error()
                    .is_some_and(|se| se.is_access_point_not_found_exception()) =>
            {
                Ok(None)
            }
            Err(e) => Err(anyhow!(
                "DescribeLoadBalancers({name}) failed: {}",
                DisplayErrorContext(e)
            )),
        }
    }

    async fn register_instance(&self, name: &str, instance: &InstanceId) -> Result<()> {
        self.client
            .register_instances_with_load_balancer()
            .load_balancer_name(name)
            .instances(to_instance(instance))
            .send()
            .await
            .map_err(|e| {
                anyhow!(
                    "RegisterInstancesWithLoadBalancer failed: {}",
                    DisplayErrorContext(e)
                )
            })?;
        Ok(())
    }

    async fn deregister_instance(&self, name: &str, instance: &InstanceId) -> Result<()> {
        self.client
            .deregister_instances_from_load_balancer()
            .load_balancer_name(name)
            .instances(to_instance(instance))
            .send()
            .await
            .map_err(|e| {
                anyhow!(
                    "DeregisterInstancesFromLoadBalancer failed: {}",
                    DisplayErrorContext(e)
                )
            })?;
        Ok(())
    }
}

fn to_instance(instance: &InstanceId) -> Instance {
    Instance::builder().instance_id(instance.as_str()).build()
}

/// Convert an API description into a domain snapshot. Nameless entries are skipped.
fn to_load_balancer(desc: &LoadBalancerDescription) -> Option<LoadBalancer> {
    let name = desc.load_balancer_name()?;
    Some(LoadBalancer::new(
        name,
        desc.instances()
            .iter()
            .filter_map(Instance::instance_id)
            .map(InstanceId::new),
    ))
}
