//! Target Rules
//!
//! The rule set consulted during a target-resolution pass. Rules are an
//! immutable value for the duration of a pass: they are assembled once from
//! configuration sources and then threaded through the resolver by reference.

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Explicit link policy requested by the rules, if any.
///
/// When absent, the target kind's own default applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPolicy {
    /// Link all engine and game code into a single binary
    Monolithic,
    /// Split engine and game code into separately loadable binaries
    Modular,
}

impl LinkPolicy {
    /// Parse a link policy from string
    pub fn parse(s: &str) -> ConfigResult<Self> {
        match s.to_lowercase().as_str() {
            "monolithic" => Ok(Self::Monolithic),
            "modular" => Ok(Self::Modular),
            other => Err(ConfigError::InvalidValue {
                field: "rules.link_policy".to_string(),
                reason: format!("must be 'monolithic' or 'modular', got '{}'", other),
            }),
        }
    }
}

impl std::fmt::Display for LinkPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monolithic => write!(f, "monolithic"),
            Self::Modular => write!(f, "modular"),
        }
    }
}

/// Rule set for one target-resolution pass
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetRules {
    /// Explicit link policy; `None` defers to the target kind's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_policy: Option<LinkPolicy>,

    /// Keep monolithic output under the engine binaries root instead of
    /// redirecting it into the game's own binaries folder
    #[serde(default)]
    pub output_to_engine_binaries: bool,

    /// Compile editor support into the target (consumed by collaborators,
    /// not by the resolver core)
    #[serde(default)]
    pub build_editor: bool,

    /// Compile server-side code into the target (consumed by collaborators)
    #[serde(default)]
    pub with_server_code: bool,
}

impl TargetRules {
    /// Merge another rule set into this one; `other` wins for set fields
    pub fn merge(&mut self, other: &TargetRules) {
        if other.link_policy.is_some() {
            self.link_policy = other.link_policy;
        }
        if other.output_to_engine_binaries {
            self.output_to_engine_binaries = true;
        }
        if other.build_editor {
            self.build_editor = true;
        }
        if other.with_server_code {
            self.with_server_code = true;
        }
    }
}
