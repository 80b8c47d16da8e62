//! Global Configuration (~/.forge/config.toml)
//!
//! Handles user-level configuration stored in `~/.forge/config.toml`.

use crate::rules::TargetRules;
use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global user configuration from ~/.forge/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    /// Baseline target rules, overridden by the project's `[rules]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<TargetRules>,
}

/// Default settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Default platform identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Default build configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
}

impl GlobalConfig {
    /// Load global configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
            file: path.to_path_buf(),
            error: e,
        })?;

        Ok(config)
    }

    /// Get the global config file path (~/.forge/config.toml)
    pub fn global_config_path() -> ConfigResult<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
        Ok(home.join(".forge").join("config.toml"))
    }

    /// Get the default platform identifier
    pub fn default_platform(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.platform.as_deref())
    }

    /// Get the default build configuration
    pub fn default_configuration(&self) -> Option<&str> {
        self.defaults
            .as_ref()
            .and_then(|d| d.configuration.as_deref())
    }
}
