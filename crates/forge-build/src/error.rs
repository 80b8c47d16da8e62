/// Resolver error types
use forge_config::ConfigError;
use thiserror::Error;

pub type BuildResult<T> = Result<T, BuildError>;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Unknown platform identifier: '{platform}'")]
    UnknownPlatform { platform: String },

    #[error("Unknown build configuration: '{configuration}'")]
    UnknownConfiguration { configuration: String },

    #[error("Unknown target kind: '{kind}'")]
    UnknownTargetKind { kind: String },

    #[error(
        "Inconsistent rules for {kind} target on {platform} ({configuration}): {reason}"
    )]
    InconsistentRules {
        kind: String,
        platform: String,
        configuration: String,
        reason: String,
    },

    #[error("Invalid target context: {0}")]
    InvalidContext(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BuildError {
    /// Create an unknown platform error
    pub fn unknown_platform(platform: impl Into<String>) -> Self {
        Self::UnknownPlatform {
            platform: platform.into(),
        }
    }

    /// Create an inconsistent rules error with full pass context
    pub fn inconsistent_rules(
        kind: impl ToString,
        platform: impl ToString,
        configuration: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InconsistentRules {
            kind: kind.to_string(),
            platform: platform.to_string(),
            configuration: configuration.to_string(),
            reason: reason.into(),
        }
    }
}
