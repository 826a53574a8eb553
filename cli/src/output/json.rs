//! JSON output renderer.
//!
//! Everything goes to stdout as a single pretty-printed document so the
//! output can be piped into `jq`. Logs and prompts stay on stderr.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::services::membership::{InstanceReport, InstanceReportView};
use crate::domain::{LoadBalancer, Operation};

/// Renders command results as JSON documents.
pub struct JsonRenderer;

#[derive(Serialize)]
struct Listing<'a> {
    count: usize,
    load_balancers: Vec<ListingEntry<'a>>,
}

#[derive(Serialize)]
struct ListingEntry<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    instances: Option<Vec<&'a str>>,
}

#[derive(Serialize)]
struct Batch<'a> {
    operation: Operation,
    success: bool,
    results: Vec<InstanceReportView<'a>>,
}

impl JsonRenderer {
    /// Render the listing as `{ "count": N, "load_balancers": [...] }`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_listing(
        &self,
        load_balancers: &[LoadBalancer],
        with_instances: bool,
    ) -> Result<()> {
        println!("{}", listing_json(load_balancers, with_instances)?);
        Ok(())
    }

    /// Render per-instance results as `{ "operation", "success", "results" }`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_reports(&self, op: Operation, reports: &[InstanceReport]) -> Result<()> {
        println!("{}", reports_json(op, reports)?);
        Ok(())
    }
}

/// Serialize the load balancer listing.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn listing_json(load_balancers: &[LoadBalancer], with_instances: bool) -> Result<String> {
    let listing = Listing {
        count: load_balancers.len(),
        load_balancers: load_balancers
            .iter()
            .map(|lb| ListingEntry {
                name: &lb.name,
                instances: with_instances
                    .then(|| lb.instances.iter().map(|i| i.as_str()).collect()),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&listing).context("JSON serialization failed")
}

/// Serialize an attach/detach batch.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn reports_json(op: Operation, reports: &[InstanceReport]) -> Result<String> {
    let batch = Batch {
        operation: op,
        success: reports.iter().all(InstanceReport::is_success),
        results: reports.iter().map(InstanceReportView::from).collect(),
    };
    serde_json::to_string_pretty(&batch).context("JSON serialization failed")
}

/// Format a JSON error object for command-level failures.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
