//! Infrastructure implementation of the `ConfigStore` port.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::application::ports::ConfigStore;
use crate::domain::config::ElbaConfig;

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV_VAR: &str = "ELBA_CONFIG";

/// Production implementation of `ConfigStore` backed by the fog-style YAML
/// file in the user's home directory (`~/.fog`).
pub struct YamlConfigStore;

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<Option<ElbaConfig>> {
        let path = self.path()?;
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Some(ElbaConfig::default()));
        }
        serde_yaml::from_str(&content)
            .map(Some)
            .with_context(|| format!("cannot parse {}", path.display()))
    }

    fn path(&self) -> Result<PathBuf> {
        if let Ok(val) = std::env::var(CONFIG_ENV_VAR) {
            return Ok(PathBuf::from(val));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".fog"))
    }
}
