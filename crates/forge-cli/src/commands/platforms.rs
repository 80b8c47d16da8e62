//! Platforms command - list the supported platform set and traits

use anyhow::Result;
use colored::Colorize;
use forge_build::Platform;

/// Run the platforms command
pub fn run(json: bool) -> Result<()> {
    if json {
        let entries: Vec<_> = Platform::ALL
            .iter()
            .map(|platform| {
                let traits = platform.traits();
                serde_json::json!({
                    "name": platform.to_string(),
                    "binaries_subdir": platform.binaries_subdir(),
                    "is_desktop": traits.is_desktop,
                    "is_console_family": traits.is_console_family,
                    "supports_modular_link": traits.supports_modular_link,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!(
        "{:<12} {:<10} {:<10} {:<10}",
        "PLATFORM".bold(),
        "DESKTOP".bold(),
        "CONSOLE".bold(),
        "MODULAR".bold()
    );
    for platform in Platform::ALL {
        let traits = platform.traits();
        println!(
            "{:<12} {:<10} {:<10} {:<10}",
            platform.to_string(),
            mark(traits.is_desktop),
            mark(traits.is_console_family),
            mark(traits.supports_modular_link),
        );
    }

    Ok(())
}

fn mark(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "-"
    }
}
