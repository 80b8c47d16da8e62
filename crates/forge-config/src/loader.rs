//! Configuration Loader
//!
//! Handles loading and merging configuration from multiple sources with proper precedence.

use crate::global::GlobalConfig;
use crate::project::ProjectConfig;
use crate::rules::{LinkPolicy, TargetRules};
use crate::ConfigResult;
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader
///
/// Loads configuration from multiple sources and merges them with proper precedence:
/// 1. Global config (~/.forge/config.toml) - lowest priority
/// 2. Project config (./forge.toml) - overrides global
/// 3. Environment variables (FORGE_*) - overrides project
/// 4. CLI flags - highest priority (handled by caller)
pub struct ConfigLoader {
    /// Cached global config path
    global_config_path: Option<PathBuf>,
}

/// Merged configuration result
#[derive(Debug, Clone)]
pub struct Config {
    /// Project configuration
    pub project: ProjectConfig,

    /// Global configuration
    pub global: GlobalConfig,

    /// Project root directory (where forge.toml was found)
    pub project_root: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            global_config_path: None,
        }
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to find forge.toml, then loads and merges
    /// global config if it exists.
    pub fn load_from_directory(&mut self, start_dir: &Path) -> ConfigResult<Config> {
        // Find project root (directory containing forge.toml)
        let (project_root, project_config) = self.find_project_config(start_dir)?;

        // Load global config (optional)
        let global_config = self.load_global_config().unwrap_or_default();

        // Apply environment variable overrides
        let project_config = self.apply_env_overrides(project_config)?;

        Ok(Config {
            project: project_config,
            global: global_config,
            project_root,
        })
    }

    /// Load configuration from a specific project config file
    pub fn load_from_file(&mut self, config_path: &Path) -> ConfigResult<Config> {
        let project_config = ProjectConfig::load_from_file(config_path)?;
        let project_config = self.apply_env_overrides(project_config)?;
        let global_config = self.load_global_config().unwrap_or_default();

        let project_root = config_path.parent().map(|p| p.to_path_buf());

        Ok(Config {
            project: project_config,
            global: global_config,
            project_root,
        })
    }

    /// Find project configuration by walking up directory tree
    ///
    /// Returns (project_root, project_config) or error if not found
    fn find_project_config(
        &self,
        start_dir: &Path,
    ) -> ConfigResult<(Option<PathBuf>, ProjectConfig)> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join("forge.toml");

            if config_path.exists() {
                let project_config = ProjectConfig::load_from_file(&config_path)?;
                return Ok((Some(current), project_config));
            }

            // Try parent directory
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding forge.toml
                    // Return default config with no project root
                    return Ok((None, ProjectConfig::default()));
                }
            }
        }
    }

    /// Load global configuration from ~/.forge/config.toml
    fn load_global_config(&mut self) -> ConfigResult<GlobalConfig> {
        // Get or cache global config path
        if self.global_config_path.is_none() {
            self.global_config_path = Some(GlobalConfig::global_config_path()?);
        }

        let path = self.global_config_path.as_ref().unwrap();

        // Global config is optional - if it doesn't exist, return default
        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        GlobalConfig::load_from_file(path)
    }

    /// Apply environment variable overrides to project config
    ///
    /// Environment variables follow the pattern: FORGE_<KEY>
    /// Example: FORGE_LINK_POLICY=modular
    fn apply_env_overrides(&self, mut config: ProjectConfig) -> ConfigResult<ProjectConfig> {
        // Check for FORGE_LINK_POLICY
        if let Ok(policy) = env::var("FORGE_LINK_POLICY") {
            let policy = LinkPolicy::parse(&policy)?;
            config.rules.get_or_insert_with(TargetRules::default).link_policy = Some(policy);
        }

        // Check for FORGE_OUTPUT_TO_ENGINE_BINARIES
        if let Ok(value) = env::var("FORGE_OUTPUT_TO_ENGINE_BINARIES") {
            let enabled = matches!(value.to_lowercase().as_str(), "true" | "1" | "yes");
            config
                .rules
                .get_or_insert_with(TargetRules::default)
                .output_to_engine_binaries = enabled;
        }

        Ok(config)
    }

    /// Get the global configuration directory (~/.forge)
    pub fn global_config_dir() -> ConfigResult<PathBuf> {
        let home = dirs::home_dir().ok_or(crate::ConfigError::HomeNotFound)?;
        Ok(home.join(".forge"))
    }

    /// Ensure global configuration directory exists
    pub fn ensure_global_config_dir() -> ConfigResult<PathBuf> {
        let dir = Self::global_config_dir()?;
        if !dir.exists() {
            std::fs::create_dir_all(&dir)?;
        }
        Ok(dir)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Get the effective target rules (global baseline overridden by project)
    pub fn target_rules(&self) -> TargetRules {
        let mut rules = self.global.rules.clone().unwrap_or_default();
        if let Some(project_rules) = &self.project.rules {
            rules.merge(project_rules);
        }
        rules
    }

    /// Get the effective default platform (project > global)
    pub fn default_platform(&self) -> Option<&str> {
        self.project
            .game
            .as_ref()
            .and_then(|g| g.default_platform.as_deref())
            .or_else(|| self.global.default_platform())
    }

    /// Get the effective default configuration (project > global)
    pub fn default_configuration(&self) -> Option<&str> {
        self.project
            .game
            .as_ref()
            .and_then(|g| g.default_configuration.as_deref())
            .or_else(|| self.global.default_configuration())
    }

    /// Get the project root directory
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    /// Get the game name
    pub fn game_name(&self) -> Option<&str> {
        self.project.game_name()
    }

    /// Check if this is a project (has forge.toml)
    pub fn is_project(&self) -> bool {
        self.project_root.is_some()
    }
}
