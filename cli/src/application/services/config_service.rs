//! Application service: configuration use-cases.

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::ConfigStore;
use crate::domain::config::{ConnectionSettings, Profile};

/// Load configuration and select the profile for `env`.
///
/// A missing configuration file is not an error: the default environment
/// then falls back to the SDK's credential chain and the default region.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, if `env` is not
/// defined in an existing file, or if the profile's credentials are incomplete.
pub fn connection_settings(store: &impl ConfigStore, env: &str) -> Result<ConnectionSettings> {
    let path = store.path()?;

    let settings = match store.load()? {
        Some(config) => config
            .profile(env, &path.display().to_string())?
            .connection_settings(env)
            .with_context(|| format!("invalid configuration in {}", path.display()))?,
        None => {
            debug!(path = %path.display(), "no configuration file, using defaults");
            Profile::default().connection_settings(env)?
        }
    };
    debug!(
        env,
        region = %settings.region,
        static_credentials = settings.credentials.is_some(),
        "configuration loaded"
    );
    Ok(settings)
}
