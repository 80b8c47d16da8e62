//! Validate command - check rules against the target/platform matrix

use anyhow::{bail, Result};
use colored::Colorize;
use forge_build::{
    resolve_target, BuildConfiguration, NullBackend, Platform, TargetContext, TargetKind,
};
use forge_config::ConfigLoader;
use std::path::PathBuf;

const ALL_KINDS: [TargetKind; 5] = [
    TargetKind::Game,
    TargetKind::Client,
    TargetKind::Server,
    TargetKind::Editor,
    TargetKind::Program,
];

/// Run the validate command
pub fn run(target: Option<String>, project_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let project_dir = project_dir.unwrap_or_else(|| PathBuf::from("."));

    let mut loader = ConfigLoader::new();
    let config = loader.load_from_directory(&project_dir)?;
    let rules = config.target_rules();
    let game_name = config.game_name().unwrap_or("Game").to_string();

    let kinds: Vec<TargetKind> = match target {
        Some(ref name) => vec![name.parse()?],
        None => ALL_KINDS.to_vec(),
    };

    let mut failures = Vec::new();
    let mut results = Vec::new();

    let mut checked = 0usize;
    for kind in &kinds {
        for platform in Platform::ALL {
            // A kind-forced mode the platform can never satisfy is not a
            // rules problem; skip those combinations instead of flagging them.
            if let Some(forced) = kind.forced_link_mode() {
                if forced == forge_build::LinkMode::Modular
                    && !platform.traits().supports_modular_link
                {
                    continue;
                }
            }
            checked += 1;

            let ctx = TargetContext::new(
                game_name.clone(),
                *kind,
                platform,
                BuildConfiguration::Development,
            )
            .with_rules(rules.clone());

            match resolve_target(&ctx, &NullBackend) {
                Ok(plan) => results.push(serde_json::json!({
                    "target": kind.to_string(),
                    "platform": platform.to_string(),
                    "link_mode": plan.link_mode.to_string(),
                    "ok": true,
                })),
                Err(err) => {
                    let message = err.to_string();
                    results.push(serde_json::json!({
                        "target": kind.to_string(),
                        "platform": platform.to_string(),
                        "ok": false,
                        "error": message.clone(),
                    }));
                    failures.push((*kind, platform, message));
                }
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if failures.is_empty() {
        println!(
            "{} {} target/platform combinations are consistent",
            "ok:".green().bold(),
            checked
        );
    } else {
        for (kind, platform, error) in &failures {
            println!("{} {} on {}: {}", "fail:".red().bold(), kind, platform, error);
        }
        println!(
            "{} of {} combinations are inconsistent",
            failures.len(),
            checked
        );
    }

    if !failures.is_empty() {
        bail!("{} inconsistent target/platform combinations", failures.len());
    }
    Ok(())
}
