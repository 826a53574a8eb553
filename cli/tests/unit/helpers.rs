//! Shared test helpers: in-memory configuration and a quiet `AppContext`.

#![allow(dead_code)]

use std::path::PathBuf;

use anyhow::Result;
use elba_cli::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use elba_cli::application::ports::ConfigStore;
use elba_cli::domain::ElbaConfig;

/// Config store that never touches the filesystem.
pub struct InMemoryConfigStore(pub Option<ElbaConfig>);

impl ConfigStore for InMemoryConfigStore {
    fn load(&self) -> Result<Option<ElbaConfig>> {
        Ok(self.0.clone())
    }

    fn path(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("/nonexistent/.fog"))
    }
}

fn flags(json: bool) -> AppFlags {
    AppFlags {
        output: OutputFlags {
            no_color: true,
            quiet: true,
            json,
        },
        behaviour: BehaviourFlags {
            yes: false,
            env: "default".to_string(),
        },
    }
}

/// Human-mode context with colors off and non-error output suppressed.
pub fn quiet_app() -> AppContext<InMemoryConfigStore> {
    AppContext::with_store(&flags(false), InMemoryConfigStore(None))
}

/// JSON-mode context.
pub fn json_app() -> AppContext<InMemoryConfigStore> {
    AppContext::with_store(&flags(true), InMemoryConfigStore(None))
}
