//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or the AWS SDK.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod guard;
pub mod load_balancer;
pub mod outcome;
pub mod resolve;

pub use config::{ConnectionSettings, ElbaConfig, Profile, StaticCredentials};
pub use error::{ConfigError, GuardError, InstanceError, MutationError, ResolutionError};
pub use guard::check_attach;
pub use load_balancer::{InstanceId, Inventory, LoadBalancer};
pub use outcome::{MutationOutcome, Operation};
pub use resolve::{Target, resolve};
