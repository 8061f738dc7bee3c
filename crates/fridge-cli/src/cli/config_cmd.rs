use crate::cli::ConfigCommands;
use crate::config::FridgeConfig;
use anyhow::{Context, Result};
use std::path::Path;

pub fn run(cmd: ConfigCommands, config_path: &Path) -> Result<()> {
    match cmd {
        ConfigCommands::Validate => {
            println!("{}", validate(config_path)?);
            Ok(())
        }
        ConfigCommands::Show => {
            print!("{}", show(config_path)?);
            Ok(())
        }
    }
}

/// One-line summary of the routine a valid config points at.
fn validate(config_path: &Path) -> Result<String> {
    let config = FridgeConfig::load(config_path)
        .with_context(|| format!("cannot read fridge config {}", config_path.display()))?;

    let problems = config.validate();
    if !problems.is_empty() {
        anyhow::bail!(
            "{} has {} problem(s):\n  {}",
            config_path.display(),
            problems.len(),
            problems.join("\n  ")
        );
    }
    Ok(format!(
        "{}: {} routine against {} (glossary from {}, {}s timeout)",
        config_path.display(),
        config.routine.day,
        config.api.url,
        config.api.frontend_url,
        config.api.timeout_secs
    ))
}

/// Effective settings as TOML, noting whether the file was found.
fn show(config_path: &Path) -> Result<String> {
    let config = FridgeConfig::load_or_default(config_path)?;
    let origin = if config_path.exists() {
        format!("# from {}", config_path.display())
    } else {
        format!("# defaults ({} not found)", config_path.display())
    };
    let body = toml::to_string_pretty(&config).context("failed to render fridge config")?;
    Ok(format!("{}\n{}", origin, body))
}
