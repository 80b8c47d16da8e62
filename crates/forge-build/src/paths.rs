//! Output path planning
//!
//! Computes the default output locations for a target's binaries and, for
//! monolithic builds on redirected platforms, rewrites the engine binaries
//! root into the game's own binaries folder. Rewriting replaces exactly one
//! directory segment; file names, extensions, counts and ordering are
//! preserved.

use crate::configuration::BuildConfiguration;
use crate::link_mode::LinkMode;
use crate::platform::{Platform, PlatformTraits};
use crate::targets::TargetKind;
use forge_config::TargetRules;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Application name used for modular binaries, where engine and game code
/// are not linked into one game-named executable
pub const ENGINE_APP_NAME: &str = "ForgeEngine";

/// The default binaries root that redirection replaces: `Engine/Binaries`
const ENGINE_ROOT_DIR: &str = "Engine";
const BINARIES_DIR: &str = "Binaries";

/// Base name of the target's primary binary.
///
/// Monolithic passes name the binary after the game; modular passes use the
/// engine application name. The kind suffix distinguishes client, server and
/// editor flavors of the same game.
pub fn binary_base_name(game_name: &str, kind: TargetKind, link_mode: LinkMode) -> String {
    if link_mode.is_monolithic() {
        format!("{}{}", game_name, kind.name_suffix())
    } else {
        format!("{}{}", ENGINE_APP_NAME, kind.name_suffix())
    }
}

/// File name of the target's primary binary, decorated with platform and
/// configuration for every configuration except Development
pub fn binary_file_name(
    game_name: &str,
    kind: TargetKind,
    platform: Platform,
    configuration: BuildConfiguration,
    link_mode: LinkMode,
) -> String {
    let base = binary_base_name(game_name, kind, link_mode);
    let decorated = if configuration.decorates_binary_names() {
        format!("{}-{}-{}", base, platform, configuration)
    } else {
        base
    };
    format!("{}{}", decorated, platform.executable_extension())
}

/// Default output paths for the primary binary, rooted at the engine
/// binaries folder
pub fn default_output_paths(
    game_name: &str,
    kind: TargetKind,
    platform: Platform,
    configuration: BuildConfiguration,
    link_mode: LinkMode,
) -> Vec<PathBuf> {
    let file_name = binary_file_name(game_name, kind, platform, configuration, link_mode);
    vec![PathBuf::from(ENGINE_ROOT_DIR)
        .join(BINARIES_DIR)
        .join(platform.binaries_subdir())
        .join(file_name)]
}

/// Intermediate directory for the target's object files
pub fn intermediate_dir(
    platform: Platform,
    base_name: &str,
    configuration: BuildConfiguration,
) -> PathBuf {
    PathBuf::from(ENGINE_ROOT_DIR)
        .join("Intermediate")
        .join("Build")
        .join(platform.binaries_subdir())
        .join(base_name)
        .join(configuration.name())
}

/// Rewrite the default output paths for one pass.
///
/// Monolithic output on a non-desktop platform (or one of the always
/// redirected legacy variants) moves from `Engine/Binaries` into
/// `<game>/Binaries`, unless the rules pin output to the engine folder.
/// Every other combination passes the defaults through unchanged. The
/// result always has the same length and order as the input.
pub fn plan_output_paths(
    defaults: &[PathBuf],
    traits: PlatformTraits,
    platform: Platform,
    kind: TargetKind,
    game_name: &str,
    rules: &TargetRules,
    link_mode: LinkMode,
) -> Vec<PathBuf> {
    let redirect = link_mode.is_monolithic()
        && kind.redirects_output_paths()
        && (!traits.is_desktop || platform.always_redirects_output())
        && !rules.output_to_engine_binaries;

    if !redirect {
        return defaults.to_vec();
    }

    defaults
        .iter()
        .map(|path| match rewrite_binaries_root(path, game_name) {
            Some(rewritten) => rewritten,
            None => {
                // A path without the engine binaries root is left as a silent
                // pass-through; surface it, since it
                // usually means a platform path convention drifted.
                warn!(
                    path = %path.display(),
                    platform = %platform,
                    "output path has no engine binaries root to redirect"
                );
                path.clone()
            }
        })
        .collect()
}

/// Replace the first `Engine/Binaries` segment pair with
/// `<game_name>/Binaries`, preserving every other component.
///
/// Returns `None` when the path does not contain the pair.
fn rewrite_binaries_root(path: &Path, game_name: &str) -> Option<PathBuf> {
    let components: Vec<_> = path.iter().collect();
    let root_at = components
        .windows(2)
        .position(|pair| pair[0] == ENGINE_ROOT_DIR && pair[1] == BINARIES_DIR)?;

    let mut rewritten = PathBuf::new();
    for (index, component) in components.iter().enumerate() {
        if index == root_at {
            rewritten.push(game_name);
        } else {
            rewritten.push(component);
        }
    }
    Some(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monolithic_redirect_paths(
        platform: Platform,
        defaults: &[PathBuf],
        rules: &TargetRules,
    ) -> Vec<PathBuf> {
        plan_output_paths(
            defaults,
            platform.traits(),
            platform,
            TargetKind::Client,
            "MyGame",
            rules,
            LinkMode::Monolithic,
        )
    }

    #[test]
    fn test_console_path_redirected_into_game_folder() {
        let defaults = vec![PathBuf::from("Engine/Binaries/Win64/MyGame.exe")];
        let rules = TargetRules::default();

        let planned = monolithic_redirect_paths(Platform::XboxOne, &defaults, &rules);
        assert_eq!(planned, vec![PathBuf::from("MyGame/Binaries/Win64/MyGame.exe")]);
    }

    #[test]
    fn test_desktop_paths_unchanged() {
        let defaults = vec![PathBuf::from("Engine/Binaries/Win64/MyGame.exe")];
        let rules = TargetRules::default();

        let planned = monolithic_redirect_paths(Platform::Win64, &defaults, &rules);
        assert_eq!(planned, defaults);
    }

    #[test]
    fn test_winrt_redirects_despite_windows_pathing() {
        let defaults = vec![PathBuf::from("Engine/Binaries/WinRT/MyGame.exe")];
        let rules = TargetRules::default();

        let planned = monolithic_redirect_paths(Platform::WinRt, &defaults, &rules);
        assert_eq!(planned, vec![PathBuf::from("MyGame/Binaries/WinRT/MyGame.exe")]);
    }

    #[test]
    fn test_engine_binaries_rule_disables_redirect() {
        let defaults = vec![PathBuf::from("Engine/Binaries/PS4/MyGame.self")];
        let rules = TargetRules {
            output_to_engine_binaries: true,
            ..Default::default()
        };

        let planned = monolithic_redirect_paths(Platform::Ps4, &defaults, &rules);
        assert_eq!(planned, defaults);
    }

    #[test]
    fn test_modular_paths_never_redirected() {
        let defaults = vec![PathBuf::from("Engine/Binaries/Win64/ForgeEngine.exe")];
        let planned = plan_output_paths(
            &defaults,
            Platform::Ps4.traits(),
            Platform::Ps4,
            TargetKind::Client,
            "MyGame",
            &TargetRules::default(),
            LinkMode::Modular,
        );
        assert_eq!(planned, defaults);
    }

    #[test]
    fn test_program_kind_never_redirected() {
        let defaults = vec![PathBuf::from("Engine/Binaries/PS4/Tool.self")];
        let planned = plan_output_paths(
            &defaults,
            Platform::Ps4.traits(),
            Platform::Ps4,
            TargetKind::Program,
            "MyGame",
            &TargetRules::default(),
            LinkMode::Monolithic,
        );
        assert_eq!(planned, defaults);
    }

    #[test]
    fn test_path_without_binaries_root_passes_through() {
        let defaults = vec![PathBuf::from("Custom/Output/MyGame.self")];
        let rules = TargetRules::default();

        let planned = monolithic_redirect_paths(Platform::Ps4, &defaults, &rules);
        assert_eq!(planned, defaults);
    }

    #[test]
    fn test_mixed_hit_and_miss_preserves_count_and_order() {
        let defaults = vec![
            PathBuf::from("Engine/Binaries/PS4/MyGame.self"),
            PathBuf::from("Custom/Output/MyGame.self"),
            PathBuf::from("Engine/Binaries/PS4/MyGameClient.self"),
        ];
        let rules = TargetRules::default();

        let planned = monolithic_redirect_paths(Platform::Ps4, &defaults, &rules);
        assert_eq!(
            planned,
            vec![
                PathBuf::from("MyGame/Binaries/PS4/MyGame.self"),
                PathBuf::from("Custom/Output/MyGame.self"),
                PathBuf::from("MyGame/Binaries/PS4/MyGameClient.self"),
            ]
        );
    }

    #[test]
    fn test_rewrite_only_touches_engine_segment() {
        let rewritten =
            rewrite_binaries_root(Path::new("Root/Engine/Binaries/Win64/Game.exe"), "MyGame")
                .unwrap();
        assert_eq!(rewritten, PathBuf::from("Root/MyGame/Binaries/Win64/Game.exe"));
    }

    #[test]
    fn test_rewrite_requires_adjacent_segments() {
        assert!(rewrite_binaries_root(Path::new("Engine/Other/Binaries/Game.exe"), "G").is_none());
        assert!(rewrite_binaries_root(Path::new("Binaries/Engine/Game.exe"), "G").is_none());
    }

    #[test]
    fn test_binary_base_name_monolithic_uses_game_name() {
        assert_eq!(
            binary_base_name("MyGame", TargetKind::Client, LinkMode::Monolithic),
            "MyGameClient"
        );
        assert_eq!(
            binary_base_name("MyGame", TargetKind::Game, LinkMode::Monolithic),
            "MyGame"
        );
    }

    #[test]
    fn test_binary_base_name_modular_uses_engine_name() {
        assert_eq!(
            binary_base_name("MyGame", TargetKind::Editor, LinkMode::Modular),
            "ForgeEngineEditor"
        );
    }

    #[test]
    fn test_development_names_are_undecorated() {
        let name = binary_file_name(
            "MyGame",
            TargetKind::Client,
            Platform::Win64,
            BuildConfiguration::Development,
            LinkMode::Monolithic,
        );
        assert_eq!(name, "MyGameClient.exe");
    }

    #[test]
    fn test_shipping_names_are_decorated() {
        let name = binary_file_name(
            "MyGame",
            TargetKind::Client,
            Platform::XboxOne,
            BuildConfiguration::Shipping,
            LinkMode::Monolithic,
        );
        assert_eq!(name, "MyGameClient-XboxOne-Shipping.exe");
    }

    #[test]
    fn test_default_output_paths_rooted_at_engine_binaries() {
        let paths = default_output_paths(
            "MyGame",
            TargetKind::Game,
            Platform::Linux,
            BuildConfiguration::Development,
            LinkMode::Monolithic,
        );
        assert_eq!(paths, vec![PathBuf::from("Engine/Binaries/Linux/MyGame")]);
    }

    #[test]
    fn test_intermediate_dir_layout() {
        let dir = intermediate_dir(Platform::Win64, "MyGameClient", BuildConfiguration::Shipping);
        assert_eq!(
            dir,
            PathBuf::from("Engine/Intermediate/Build/Win64/MyGameClient/Shipping")
        );
    }
}
