//! Plan command - resolve one target into its binary plan

use anyhow::{bail, Context, Result};
use colored::Colorize;
use forge_build::{
    resolve_target, BuildConfiguration, NullBackend, Platform, TargetContext, TargetKind,
    TargetPlan,
};
use forge_config::{ConfigLoader, LinkPolicy};
use std::path::PathBuf;

/// Plan command arguments
#[derive(Default)]
pub struct PlanArgs {
    /// Target kind
    pub target: String,
    /// Game name (defaults to forge.toml [game] name)
    pub game: Option<String>,
    /// Platform identifier
    pub platform: Option<String>,
    /// Build configuration
    pub configuration: Option<String>,
    /// Additional preprocessor definitions
    pub definitions: Vec<String>,
    /// Link policy override
    pub link_policy: Option<String>,
    /// Keep monolithic output under the engine binaries root
    pub output_to_engine_binaries: bool,
    /// Project directory (defaults to current directory)
    pub project_dir: Option<PathBuf>,
    /// JSON output
    pub json: bool,
    /// Quiet output (paths only)
    pub quiet: bool,
}

/// Run the plan command
pub fn run(args: PlanArgs) -> Result<()> {
    let project_dir = args
        .project_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let mut loader = ConfigLoader::new();
    let config = loader
        .load_from_directory(&project_dir)
        .context("Failed to load configuration")?;

    let kind: TargetKind = args.target.parse()?;

    let game_name = match args.game.clone().or_else(|| {
        config.game_name().map(|name| name.to_string())
    }) {
        Some(name) => name,
        None => bail!("No game name given; pass --game or add [game] to forge.toml"),
    };

    let platform = resolve_platform(&args, &config)?;
    let configuration = resolve_configuration(&args, &config)?;

    // CLI flags are the last override on top of the loaded rules
    let mut rules = config.target_rules();
    if let Some(ref policy) = args.link_policy {
        rules.link_policy = Some(LinkPolicy::parse(policy)?);
    }
    if args.output_to_engine_binaries {
        rules.output_to_engine_binaries = true;
    }

    let mut definitions = config.project.definitions().to_vec();
    definitions.extend(args.definitions.iter().cloned());

    let ctx = TargetContext::new(game_name, kind, platform, configuration)
        .with_rules(rules)
        .with_definitions(definitions);

    let plan = resolve_target(&ctx, &NullBackend).context("Target resolution failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else if args.quiet {
        for binary in &plan.binaries {
            for path in &binary.output_paths {
                println!("{}", path.display());
            }
        }
    } else {
        print_plan(&plan);
    }

    Ok(())
}

/// Determine the platform from arguments, then configured defaults
fn resolve_platform(args: &PlanArgs, config: &forge_config::Config) -> Result<Platform> {
    match args
        .platform
        .as_deref()
        .or_else(|| config.default_platform())
    {
        Some(platform) => Ok(platform.parse()?),
        None => bail!("No platform given; pass --platform or configure a default"),
    }
}

/// Determine the build configuration, defaulting to Development
fn resolve_configuration(
    args: &PlanArgs,
    config: &forge_config::Config,
) -> Result<BuildConfiguration> {
    match args
        .configuration
        .as_deref()
        .or_else(|| config.default_configuration())
    {
        Some(configuration) => Ok(configuration.parse()?),
        None => Ok(BuildConfiguration::default()),
    }
}

/// Human-readable plan output
fn print_plan(plan: &TargetPlan) {
    println!("{}", "=".repeat(60));
    println!(
        "{} {} target for {} ({})",
        "Plan:".bold(),
        plan.kind,
        plan.platform,
        plan.configuration
    );
    println!("{}", "=".repeat(60));
    println!("  Link mode: {}", plan.link_mode.to_string().cyan());

    for (index, binary) in plan.binaries.iter().enumerate() {
        println!("  Binary #{} ({:?})", index + 1, binary.kind);
        for path in &binary.output_paths {
            println!("    output:       {}", path.display().to_string().green());
        }
        println!("    intermediate: {}", binary.intermediate_dir.display());
        println!("    modules:      {}", binary.module_names.join(", "));
        println!(
            "    exports: {}  import lib: {}",
            binary.allows_exports, binary.creates_import_library
        );
    }

    let env = &plan.environment;
    println!("  Environment:");
    println!("    editor: {}  editor-only data: {}", env.build_editor, env.build_editor_only_data);
    println!(
        "    cooked data: {}  against engine: {}  server code: {}",
        env.requires_cooked_data, env.compile_against_engine, env.with_server_code
    );
    println!("    exports verified: {}", env.has_exports);
    if !env.definitions.is_empty() {
        println!("    definitions: {}", env.definitions.join(" "));
    }
    println!("{}", "=".repeat(60));
}
