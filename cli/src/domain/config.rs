//! Domain types for the credentials/region configuration file.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Environment used when none is given on the command line.
pub const DEFAULT_ENVIRONMENT: &str = "default";

/// Region used when the selected profile does not name one.
pub const DEFAULT_REGION: &str = "eu-west-1";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.fog`: one profile per environment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ElbaConfig {
    pub environments: BTreeMap<String, Profile>,
}

/// Credentials and region for one environment.
///
/// Unknown keys (other providers' settings sharing the file) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_access_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_secret_access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_session_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Static credentials extracted from a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

/// What the provider gateway needs to connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub region: String,
    /// `None` defers to the SDK's default credential chain.
    pub credentials: Option<StaticCredentials>,
}

impl Profile {
    /// Turn the profile into connection settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::IncompleteCredentials` when only one half of the
    /// key pair is present.
    pub fn connection_settings(&self, env: &str) -> Result<ConnectionSettings, ConfigError> {
        let credentials = match (&self.aws_access_key_id, &self.aws_secret_access_key) {
            (Some(id), Some(secret)) => Some(StaticCredentials {
                access_key_id: id.clone(),
                secret_access_key: secret.clone(),
                session_token: self.aws_session_token.clone(),
            }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::IncompleteCredentials {
                    env: env.to_string(),
                    missing: "aws_secret_access_key",
                });
            }
            (None, Some(_)) => {
                return Err(ConfigError::IncompleteCredentials {
                    env: env.to_string(),
                    missing: "aws_access_key_id",
                });
            }
        };
        Ok(ConnectionSettings {
            region: self
                .region
                .clone()
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            credentials,
        })
    }
}

impl ElbaConfig {
    /// Pick the profile for `env`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownEnvironment` when `env` is not in the file.
    pub fn profile(&self, env: &str, path: &str) -> Result<&Profile, ConfigError> {
        self.environments
            .get(env)
            .ok_or_else(|| ConfigError::UnknownEnvironment {
                env: env.to_string(),
                path: path.to_string(),
                available: if self.environments.is_empty() {
                    "(none)".to_string()
                } else {
                    self.environments
                        .keys()
                        .map(String::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                },
            })
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
