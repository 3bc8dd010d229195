//! Configuration loader with file and environment variable support.

use crate::{AppConfig, ConfigError};
use rc_common::MutationFailurePolicy;
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Standard config file search paths, checked in order.
const CONFIG_PATHS: &[&str] = &[
    "config.toml",
    "rolecall.toml",
    "./config/rolecall.toml",
    "/etc/rolecall/config.toml",
];

/// Configuration loader.
///
/// Resolution order: explicit path, then `ROLECALL_CONFIG`, then the
/// standard search paths, then built-in defaults. `ROLECALL_*`
/// environment overrides are applied last and the result validated.
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self { config_path: None }
    }

    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        let mut config = AppConfig::default();

        if let Some(path) = self.find_config_file() {
            info!(?path, "loading configuration from file");
            config = AppConfig::from_file(&path)?;
        }

        self.apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    fn find_config_file(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config_path {
            if path.exists() {
                return Some(path.clone());
            }
        }

        if let Ok(path) = env::var("ROLECALL_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        CONFIG_PATHS
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    fn apply_env_overrides(&self, config: &mut AppConfig) -> Result<(), ConfigError> {
        if let Ok(val) = env::var("ROLECALL_API_BASE_URL") {
            config.api.base_url = val;
        }
        if let Ok(val) = env::var("ROLECALL_API_TIMEOUT_SECS") {
            if let Ok(timeout) = val.parse() {
                config.api.timeout_secs = timeout;
            }
        }
        if let Ok(val) = env::var("ROLECALL_EDITOR_ON_FAILURE") {
            config.editor.on_mutation_failure = val
                .parse::<MutationFailurePolicy>()
                .map_err(ConfigError::Validation)?;
        }
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
