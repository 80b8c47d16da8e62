//! Forge build-target configuration resolver
//!
//! Decides, for one (game, platform, configuration) request:
//! - whether the target links monolithically or modularly
//! - which binary artifacts are produced, in order
//! - where each artifact's output path lives for the platform
//! - which global compile/link environment flags apply
//!
//! Resolution is a single synchronous pass over an owned context; derived
//! classifications are pure functions, so independent passes may run
//! concurrently without shared state.

pub mod binaries;
pub mod configuration;
pub mod environment;
pub mod error;
pub mod link_mode;
pub mod paths;
pub mod platform;
pub mod resolver;
pub mod targets;

// Re-export main types
pub use binaries::{build_primary_binary, BinaryKind, BinarySpec, NullBackend, PlatformBackend};
pub use configuration::BuildConfiguration;
pub use environment::{EnvironmentPatch, TargetEnvironment};
pub use error::{BuildError, BuildResult};
pub use link_mode::{resolve_link_mode, LinkMode};
pub use paths::{
    binary_base_name, binary_file_name, default_output_paths, intermediate_dir,
    plan_output_paths, ENGINE_APP_NAME,
};
pub use platform::{Platform, PlatformTraits};
pub use resolver::{resolve_target, TargetContext, TargetPlan};
pub use targets::TargetKind;

// Re-export forge-config types for convenience
pub use forge_config::{LinkPolicy, TargetRules};
