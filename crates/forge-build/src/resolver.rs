//! Target resolution orchestration
//!
//! Drives one resolution pass start to finish: classify the platform,
//! resolve the link mode, plan output paths, build the binary list, let the
//! platform backend append its extras, then derive the compile/link
//! environment. A pass owns its context exclusively; the produced plan is
//! handed to collaborators read-only.

use crate::binaries::{build_primary_binary, BinarySpec, PlatformBackend};
use crate::configuration::BuildConfiguration;
use crate::environment::TargetEnvironment;
use crate::error::{BuildError, BuildResult};
use crate::link_mode::{resolve_link_mode, LinkMode};
use crate::paths::{binary_base_name, default_output_paths, intermediate_dir, plan_output_paths};
use crate::platform::Platform;
use crate::targets::TargetKind;
use forge_config::TargetRules;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything one resolution pass needs, owned for its duration
#[derive(Debug, Clone)]
pub struct TargetContext {
    /// Game name; names the monolithic executable and the redirected
    /// binaries folder
    pub game_name: String,
    /// Target kind
    pub kind: TargetKind,
    /// Target platform
    pub platform: Platform,
    /// Build configuration
    pub configuration: BuildConfiguration,
    /// Rule set, immutable for the pass
    pub rules: TargetRules,
    /// Extra preprocessor definitions appended after the kind's own
    pub additional_definitions: Vec<String>,
}

impl TargetContext {
    /// Create a context with default rules and no extra definitions
    pub fn new(
        game_name: impl Into<String>,
        kind: TargetKind,
        platform: Platform,
        configuration: BuildConfiguration,
    ) -> Self {
        Self {
            game_name: game_name.into(),
            kind,
            platform,
            configuration,
            rules: TargetRules::default(),
            additional_definitions: Vec::new(),
        }
    }

    /// Set the rule set
    pub fn with_rules(mut self, rules: TargetRules) -> Self {
        self.rules = rules;
        self
    }

    /// Add extra preprocessor definitions
    pub fn with_definitions(mut self, definitions: Vec<String>) -> Self {
        self.additional_definitions = definitions;
        self
    }

    fn validate(&self) -> BuildResult<()> {
        if self.game_name.is_empty() {
            return Err(BuildError::InvalidContext(
                "game name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolved plan for one target, immutable once produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetPlan {
    /// Target kind the plan was resolved for
    pub kind: TargetKind,
    /// Platform the plan was resolved for
    pub platform: Platform,
    /// Build configuration the plan was resolved for
    pub configuration: BuildConfiguration,
    /// Chosen link mode
    pub link_mode: LinkMode,
    /// Binary artifacts, primary executable first, backend extras after
    pub binaries: Vec<BinarySpec>,
    /// Global compile/link environment
    pub environment: TargetEnvironment,
}

impl TargetPlan {
    /// The primary launcher executable
    pub fn primary_binary(&self) -> &BinarySpec {
        // A plan always carries the primary binary; it is built before the
        // backend runs and nothing removes it.
        &self.binaries[0]
    }
}

/// Resolve one target into its plan.
///
/// Fails on an inconsistent rule set (modular linking requested on a
/// platform without modular support) or an invalid context; never partially
/// succeeds.
pub fn resolve_target(
    ctx: &TargetContext,
    backend: &dyn PlatformBackend,
) -> BuildResult<TargetPlan> {
    ctx.validate()?;

    let traits = ctx.platform.traits();
    let link_mode = resolve_link_mode(ctx.kind, &ctx.rules);
    debug!(
        kind = %ctx.kind,
        platform = %ctx.platform,
        configuration = %ctx.configuration,
        %link_mode,
        "resolving target"
    );

    if link_mode == LinkMode::Modular && !traits.supports_modular_link {
        return Err(BuildError::inconsistent_rules(
            ctx.kind,
            ctx.platform,
            ctx.configuration,
            "modular linking is not supported on this platform",
        ));
    }

    let defaults = default_output_paths(
        &ctx.game_name,
        ctx.kind,
        ctx.platform,
        ctx.configuration,
        link_mode,
    );
    let output_paths = plan_output_paths(
        &defaults,
        traits,
        ctx.platform,
        ctx.kind,
        &ctx.game_name,
        &ctx.rules,
        link_mode,
    );

    let base_name = binary_base_name(&ctx.game_name, ctx.kind, link_mode);
    let mut binaries = vec![build_primary_binary(
        ctx.kind,
        link_mode,
        output_paths,
        intermediate_dir(ctx.platform, &base_name, ctx.configuration),
    )];

    // Platform-mandated extras go strictly after the primary artifact.
    backend.setup_binaries(ctx.platform, &mut binaries);

    let mut environment = TargetEnvironment::default();
    environment.apply(&ctx.kind.environment_patch());
    for definition in &ctx.additional_definitions {
        environment.add_definition(definition);
    }

    Ok(TargetPlan {
        kind: ctx.kind,
        platform: ctx.platform,
        configuration: ctx.configuration,
        link_mode,
        binaries,
        environment,
    })
}
