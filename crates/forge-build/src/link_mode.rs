//! Link-mode resolution
//!
//! The link mode is a pure function of target kind and rules, resolved once
//! per pass before paths or binaries are planned. It is never stored outside
//! the pass.

use crate::targets::TargetKind;
use forge_config::{LinkPolicy, TargetRules};
use serde::{Deserialize, Serialize};

/// How a target's code is linked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkMode {
    /// All game and engine code in a single binary
    Monolithic,
    /// Engine and game modules as separately loadable binaries
    Modular,
}

impl LinkMode {
    pub fn is_monolithic(&self) -> bool {
        matches!(self, Self::Monolithic)
    }
}

impl From<LinkPolicy> for LinkMode {
    fn from(policy: LinkPolicy) -> Self {
        match policy {
            LinkPolicy::Monolithic => Self::Monolithic,
            LinkPolicy::Modular => Self::Modular,
        }
    }
}

impl std::fmt::Display for LinkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monolithic => write!(f, "monolithic"),
            Self::Modular => write!(f, "modular"),
        }
    }
}

/// Resolve the link mode for one pass.
///
/// Precedence: the kind's forced mode, then the rules' explicit policy,
/// then the kind's default.
pub fn resolve_link_mode(kind: TargetKind, rules: &TargetRules) -> LinkMode {
    if let Some(forced) = kind.forced_link_mode() {
        return forced;
    }
    match rules.link_policy {
        Some(policy) => policy.into(),
        None => kind.default_link_mode(),
    }
}
