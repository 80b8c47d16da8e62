//! Build configuration axis (Debug .. Shipping)

use crate::error::{BuildError, BuildResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Build configuration for a target-resolution pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildConfiguration {
    /// Full debug, engine and game unoptimized
    Debug,
    /// Game code debug, engine optimized
    DebugGame,
    /// Optimized with development checks (default)
    Development,
    /// Shipping plus testing hooks
    Test,
    /// Final optimized build
    Shipping,
}

impl BuildConfiguration {
    /// Whether binary file names carry the `-<Platform>-<Configuration>`
    /// decoration. Development builds are undecorated by convention so the
    /// common case keeps stable file names.
    pub fn decorates_binary_names(&self) -> bool {
        !matches!(self, Self::Development)
    }

    /// Configuration segment used in decorated names and intermediate paths
    pub fn name(&self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::DebugGame => "DebugGame",
            Self::Development => "Development",
            Self::Test => "Test",
            Self::Shipping => "Shipping",
        }
    }
}

impl Default for BuildConfiguration {
    fn default() -> Self {
        Self::Development
    }
}

impl FromStr for BuildConfiguration {
    type Err = BuildError;

    fn from_str(s: &str) -> BuildResult<Self> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "debuggame" => Ok(Self::DebugGame),
            "development" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            "shipping" => Ok(Self::Shipping),
            other => Err(BuildError::UnknownConfiguration {
                configuration: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_is_default_and_undecorated() {
        assert_eq!(BuildConfiguration::default(), BuildConfiguration::Development);
        assert!(!BuildConfiguration::Development.decorates_binary_names());
    }

    #[test]
    fn test_other_configurations_decorate() {
        for config in [
            BuildConfiguration::Debug,
            BuildConfiguration::DebugGame,
            BuildConfiguration::Test,
            BuildConfiguration::Shipping,
        ] {
            assert!(config.decorates_binary_names(), "{} should decorate", config);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "shipping".parse::<BuildConfiguration>().unwrap(),
            BuildConfiguration::Shipping
        );
        assert_eq!(
            "DebugGame".parse::<BuildConfiguration>().unwrap(),
            BuildConfiguration::DebugGame
        );
        assert!("profile".parse::<BuildConfiguration>().is_err());
    }
}
