//! Project Configuration (forge.toml)
//!
//! Handles project-level configuration stored in `forge.toml` at the project root.

use crate::rules::TargetRules;
use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project configuration from forge.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Game metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<GameConfig>,

    /// Build layout configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildConfig>,

    /// Target rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<TargetRules>,
}

/// Game metadata configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Game name; names the monolithic executable and the redirected
    /// binaries folder
    pub name: String,

    /// Default platform identifier for CLI invocations that omit one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_platform: Option<String>,

    /// Default build configuration for CLI invocations that omit one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_configuration: Option<String>,
}

/// Build layout configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Intermediate directory root (default: "Engine/Intermediate/Build")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate_root: Option<PathBuf>,

    /// Additional preprocessor definitions applied to every target
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub definitions: Vec<String>,
}

impl ProjectConfig {
    /// Load project configuration from a file
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

        config.validate()?;
        Ok(config)
    }

    /// Validate the project configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(game) = &self.game {
            if game.name.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "game.name".to_string(),
                    reason: "game name cannot be empty".to_string(),
                });
            }
            if game.name.contains(|c| c == '/' || c == '\\') {
                return Err(ConfigError::InvalidValue {
                    field: "game.name".to_string(),
                    reason: format!("game name '{}' contains a path separator", game.name),
                });
            }
        }

        Ok(())
    }

    /// Get the game name, if configured
    pub fn game_name(&self) -> Option<&str> {
        self.game.as_ref().map(|g| g.name.as_str())
    }

    /// Get the target rules, defaulted when the section is absent
    pub fn target_rules(&self) -> TargetRules {
        self.rules.clone().unwrap_or_default()
    }

    /// Get the additional global definitions
    pub fn definitions(&self) -> &[String] {
        self.build
            .as_ref()
            .map(|b| b.definitions.as_slice())
            .unwrap_or(&[])
    }
}
