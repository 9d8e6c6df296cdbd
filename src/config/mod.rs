//! Configuration module for featureview
//!
//! Settings live in the user's config directory
//! (`~/.config/featureview/config.toml` on Linux) and can be overridden by
//! `FEATUREVIEW_*` environment variables.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::QueryPolicy;

const DEFAULT_LOG_FILTER: &str = "featureview=info";

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

const fn default_color() -> bool {
    true
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FeatureConfig {
    /// How overlapping searches are reconciled
    #[serde(default)]
    pub query_policy: QueryPolicy,

    /// Default `tracing` filter directive when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Colorize text output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Catalog file used when none is given on the command line
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            query_policy: QueryPolicy::default(),
            log_filter: default_log_filter(),
            color: default_color(),
            catalog: None,
        }
    }
}

impl FeatureConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("featureview").join("config.toml"))
    }

    /// Load configuration from the user config file, creating a default one
    /// if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file, layered under the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or holds invalid values.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(Environment::with_prefix("FEATUREVIEW"))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}
