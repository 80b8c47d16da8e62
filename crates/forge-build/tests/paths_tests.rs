//! Property tests for the output path planner

use forge_build::{plan_output_paths, LinkMode, Platform, TargetKind, TargetRules};
use proptest::prelude::*;
use std::path::PathBuf;

/// Path segments that never collide with the engine binaries root
fn segment() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,11}".prop_filter("reserved segment", |s| {
        s != "Engine" && s != "Binaries"
    })
}

/// Arbitrary default paths: some rooted at the engine binaries folder, some not
fn default_path() -> impl Strategy<Value = PathBuf> {
    (any::<bool>(), prop::collection::vec(segment(), 1..4)).prop_map(|(under_engine, tail)| {
        let mut path = if under_engine {
            PathBuf::from("Engine").join("Binaries")
        } else {
            PathBuf::new()
        };
        for part in tail {
            path.push(part);
        }
        path
    })
}

proptest! {
    #[test]
    fn planner_preserves_count_and_order(
        defaults in prop::collection::vec(default_path(), 0..8),
        monolithic in any::<bool>(),
        to_engine in any::<bool>(),
    ) {
        let platform = Platform::Ps4;
        let rules = TargetRules { output_to_engine_binaries: to_engine, ..Default::default() };
        let link_mode = if monolithic { LinkMode::Monolithic } else { LinkMode::Modular };

        let planned = plan_output_paths(
            &defaults,
            platform.traits(),
            platform,
            TargetKind::Client,
            "MyGame",
            &rules,
            link_mode,
        );

        prop_assert_eq!(planned.len(), defaults.len());
        for (before, after) in defaults.iter().zip(&planned) {
            // File name and depth survive any rewrite
            prop_assert_eq!(before.file_name(), after.file_name());
            prop_assert_eq!(before.iter().count(), after.iter().count());
        }
    }

    #[test]
    fn redirected_paths_differ_only_in_the_root_segment(
        tail in prop::collection::vec(segment(), 1..4),
    ) {
        let mut default = PathBuf::from("Engine").join("Binaries");
        for part in &tail {
            default.push(part);
        }

        let platform = Platform::XboxOne;
        let planned = plan_output_paths(
            std::slice::from_ref(&default),
            platform.traits(),
            platform,
            TargetKind::Client,
            "MyGame",
            &TargetRules::default(),
            LinkMode::Monolithic,
        );

        let mut expected = PathBuf::from("MyGame").join("Binaries");
        for part in &tail {
            expected.push(part);
        }
        prop_assert_eq!(&planned[0], &expected);
    }

    #[test]
    fn desktop_planning_is_identity(
        defaults in prop::collection::vec(default_path(), 0..8),
    ) {
        let platform = Platform::Win64;
        let planned = plan_output_paths(
            &defaults,
            platform.traits(),
            platform,
            TargetKind::Client,
            "MyGame",
            &TargetRules::default(),
            LinkMode::Monolithic,
        );
        prop_assert_eq!(planned, defaults);
    }
}
