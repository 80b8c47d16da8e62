use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// Forge build-target configuration resolver.
///
/// Forge decides how a game target links, which binaries it produces, and
/// where they land on disk, for every supported platform and build
/// configuration.
///
/// EXAMPLES:
///     forge plan --target client --platform win64      Resolve a target plan
///     forge plan --target client --json                Plan as JSON
///     forge platforms                                  List supported platforms
///     forge validate                                   Check rules across the matrix
///
/// ENVIRONMENT VARIABLES:
///     FORGE_JSON                        Set to '1' for JSON output by default
///     FORGE_LINK_POLICY                 Override the rules' link policy
///     FORGE_OUTPUT_TO_ENGINE_BINARIES   Keep monolithic output under Engine/
///     FORGE_LOG                         Log filter (e.g. 'forge_build=debug')
///     NO_COLOR                          Set to disable colored output
#[derive(Parser)]
#[command(name = "forge")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a target into its binary plan
    ///
    /// Loads rules from forge.toml (plus global config and FORGE_*
    /// overrides), resolves link mode, output paths, binaries and the
    /// compile/link environment, and prints the plan.
    ///
    /// EXAMPLES:
    ///     forge plan --target client --platform xboxone --configuration shipping
    ///     forge plan --target editor --json
    #[command(visible_alias = "p")]
    Plan {
        /// Target kind (game, client, server, editor, program)
        #[arg(long, short = 't')]
        target: String,
        /// Game name (defaults to forge.toml [game] name)
        #[arg(long, short = 'g')]
        game: Option<String>,
        /// Platform identifier (defaults to the configured default platform)
        #[arg(long, short = 'p')]
        platform: Option<String>,
        /// Build configuration (debug, debuggame, development, test, shipping)
        #[arg(long, short = 'c')]
        configuration: Option<String>,
        /// Additional preprocessor definition (repeatable)
        #[arg(long = "define", short = 'D')]
        definitions: Vec<String>,
        /// Override the rules' link policy (monolithic or modular)
        #[arg(long)]
        link_policy: Option<String>,
        /// Keep monolithic output under the engine binaries root
        #[arg(long)]
        output_to_engine_binaries: bool,
        /// Project directory (defaults to current directory)
        #[arg(long)]
        project_dir: Option<PathBuf>,
        /// Output the plan as JSON
        #[arg(long, env = "FORGE_JSON")]
        json: bool,
        /// Quiet output (paths only)
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// List the supported platforms and their traits
    ///
    /// EXAMPLES:
    ///     forge platforms
    ///     forge platforms --json
    Platforms {
        /// Output as JSON
        #[arg(long, env = "FORGE_JSON")]
        json: bool,
    },

    /// Check the configured rules against the whole platform matrix
    ///
    /// Resolves every (target kind, platform) combination with the loaded
    /// rules and reports which ones are inconsistent.
    ///
    /// EXAMPLES:
    ///     forge validate
    ///     forge validate --target client
    Validate {
        /// Restrict the check to one target kind
        #[arg(long, short = 't')]
        target: Option<String>,
        /// Project directory (defaults to current directory)
        #[arg(long)]
        project_dir: Option<PathBuf>,
        /// Output as JSON
        #[arg(long, env = "FORGE_JSON")]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("FORGE_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            target,
            game,
            platform,
            configuration,
            definitions,
            link_policy,
            output_to_engine_binaries,
            project_dir,
            json,
            quiet,
        } => commands::plan::run(commands::plan::PlanArgs {
            target,
            game,
            platform,
            configuration,
            definitions,
            link_policy,
            output_to_engine_binaries,
            project_dir,
            json,
            quiet,
        }),
        Commands::Platforms { json } => commands::platforms::run(json),
        Commands::Validate {
            target,
            project_dir,
            json,
        } => commands::validate::run(target, project_dir, json),
    }
}
