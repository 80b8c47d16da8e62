//! Target kinds and their resolution policy
//!
//! Kind-specific behavior is dispatched through `match` on a closed enum
//! rather than through trait objects, so every policy axis is exhaustively
//! checked when a kind is added.

use crate::environment::EnvironmentPatch;
use crate::error::{BuildError, BuildResult};
use crate::link_mode::LinkMode;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of build target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// Standalone game (client and server code in one binary)
    Game,
    /// Network client executable, no server-side code
    Client,
    /// Dedicated server executable
    Server,
    /// Editor host
    Editor,
    /// Standalone utility program, built without the full engine
    Program,
}

impl TargetKind {
    /// Modules every binary of this kind bootstraps from
    pub fn bootstrap_modules(&self) -> &'static [&'static str] {
        // All current kinds boot through the launch module; the launcher
        // decides what to load next from the environment definitions.
        match self {
            Self::Game | Self::Client | Self::Server | Self::Editor | Self::Program => &["Launch"],
        }
    }

    /// Link mode used when neither the kind nor the rules force one
    pub fn default_link_mode(&self) -> LinkMode {
        match self {
            Self::Game | Self::Client | Self::Server | Self::Program => LinkMode::Monolithic,
            Self::Editor => LinkMode::Modular,
        }
    }

    /// Link mode this kind mandates regardless of the rules, if any
    pub fn forced_link_mode(&self) -> Option<LinkMode> {
        match self {
            // Editor binaries host dynamically reloadable game modules and
            // cannot link monolithically.
            Self::Editor => Some(LinkMode::Modular),
            Self::Game | Self::Client | Self::Server | Self::Program => None,
        }
    }

    /// Whether monolithic output for this kind moves from the engine
    /// binaries root into the game's own binaries folder on non-desktop
    /// platforms
    pub fn redirects_output_paths(&self) -> bool {
        match self {
            Self::Game | Self::Client | Self::Server => true,
            Self::Editor | Self::Program => false,
        }
    }

    /// Suffix appended to the binary base name
    pub fn name_suffix(&self) -> &'static str {
        match self {
            Self::Game => "",
            Self::Client => "Client",
            Self::Server => "Server",
            Self::Editor => "Editor",
            Self::Program => "",
        }
    }

    /// Fixed environment overrides this kind contributes, applied once per
    /// resolution pass on top of the base environment
    pub fn environment_patch(&self) -> EnvironmentPatch {
        match self {
            Self::Game => EnvironmentPatch {
                build_editor: Some(false),
                build_editor_only_data: Some(false),
                requires_cooked_data: Some(true),
                compile_against_engine: Some(true),
                lean_and_mean: Some(true),
                has_exports: Some(false),
                definitions: vec!["FORGE_GAME=1".to_string()],
                ..Default::default()
            },
            Self::Client => EnvironmentPatch {
                build_editor: Some(false),
                build_editor_only_data: Some(false),
                requires_cooked_data: Some(true),
                compile_against_engine: Some(true),
                with_server_code: Some(false),
                lean_and_mean: Some(true),
                has_exports: Some(false),
                definitions: vec!["FORGE_GAME=1".to_string()],
            },
            Self::Server => EnvironmentPatch {
                build_editor: Some(false),
                build_editor_only_data: Some(false),
                requires_cooked_data: Some(true),
                compile_against_engine: Some(true),
                with_server_code: Some(true),
                lean_and_mean: Some(true),
                has_exports: Some(false),
                definitions: vec!["FORGE_SERVER=1".to_string()],
            },
            Self::Editor => EnvironmentPatch {
                build_editor: Some(true),
                build_editor_only_data: Some(true),
                requires_cooked_data: Some(false),
                compile_against_engine: Some(true),
                has_exports: Some(true),
                definitions: vec!["FORGE_EDITOR=1".to_string()],
                ..Default::default()
            },
            Self::Program => EnvironmentPatch {
                build_editor: Some(false),
                build_editor_only_data: Some(false),
                requires_cooked_data: Some(false),
                compile_against_engine: Some(false),
                with_server_code: Some(false),
                lean_and_mean: Some(true),
                has_exports: Some(false),
                definitions: vec!["FORGE_PROGRAM=1".to_string()],
            },
        }
    }
}

impl FromStr for TargetKind {
    type Err = BuildError;

    fn from_str(s: &str) -> BuildResult<Self> {
        match s.to_lowercase().as_str() {
            "game" => Ok(Self::Game),
            "client" => Ok(Self::Client),
            "server" => Ok(Self::Server),
            "editor" => Ok(Self::Editor),
            "program" => Ok(Self::Program),
            other => Err(BuildError::UnknownTargetKind {
                kind: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Game => write!(f, "game"),
            Self::Client => write!(f, "client"),
            Self::Server => write!(f, "server"),
            Self::Editor => write!(f, "editor"),
            Self::Program => write!(f, "program"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_modules() {
        assert_eq!(TargetKind::Client.bootstrap_modules(), ["Launch"]);
        assert_eq!(TargetKind::Server.bootstrap_modules(), ["Launch"]);
    }

    #[test]
    fn test_default_link_modes() {
        assert_eq!(TargetKind::Game.default_link_mode(), LinkMode::Monolithic);
        assert_eq!(TargetKind::Client.default_link_mode(), LinkMode::Monolithic);
        assert_eq!(TargetKind::Editor.default_link_mode(), LinkMode::Modular);
    }

    #[test]
    fn test_only_editor_forces_a_mode() {
        assert_eq!(TargetKind::Editor.forced_link_mode(), Some(LinkMode::Modular));
        for kind in [
            TargetKind::Game,
            TargetKind::Client,
            TargetKind::Server,
            TargetKind::Program,
        ] {
            assert_eq!(kind.forced_link_mode(), None, "{} should not force", kind);
        }
    }

    #[test]
    fn test_redirect_policy() {
        assert!(TargetKind::Client.redirects_output_paths());
        assert!(TargetKind::Game.redirects_output_paths());
        assert!(TargetKind::Server.redirects_output_paths());
        assert!(!TargetKind::Editor.redirects_output_paths());
        assert!(!TargetKind::Program.redirects_output_paths());
    }

    #[test]
    fn test_client_environment_patch() {
        let patch = TargetKind::Client.environment_patch();
        assert_eq!(patch.build_editor, Some(false));
        assert_eq!(patch.build_editor_only_data, Some(false));
        assert_eq!(patch.requires_cooked_data, Some(true));
        assert_eq!(patch.compile_against_engine, Some(true));
        assert_eq!(patch.with_server_code, Some(false));
        assert_eq!(patch.has_exports, Some(false));
        assert_eq!(patch.definitions, ["FORGE_GAME=1"]);
    }

    #[test]
    fn test_game_patch_keeps_server_code() {
        let patch = TargetKind::Game.environment_patch();
        assert_eq!(patch.with_server_code, None);
    }

    #[test]
    fn test_from_str_round_trip() {
        for kind in [
            TargetKind::Game,
            TargetKind::Client,
            TargetKind::Server,
            TargetKind::Editor,
            TargetKind::Program,
        ] {
            assert_eq!(kind.to_string().parse::<TargetKind>().unwrap(), kind);
        }
        assert!("plugin".parse::<TargetKind>().is_err());
    }
}
