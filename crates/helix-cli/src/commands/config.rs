//! `helix config`: inspect and create the configuration file.

use std::fs;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(cmd: ConfigCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => output.data(config.to_toml()?.trim_end())?,
        ConfigCommands::Path => output.data(&AppConfig::config_path().display().to_string())?,
        ConfigCommands::Init { force } => init(force, output)?,
    }
    Ok(())
}

/// Write the default configuration, keeping an existing file unless `force`.
fn init(force: bool, output: &OutputManager) -> CliResult<()> {
    let path = AppConfig::config_path();

    if path.exists() && !force {
        output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        ))?;
        return Ok(());
    }

    let toml = AppConfig::default().to_toml()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create config directory '{}'", parent.display()))?;
    }
    fs::write(&path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    output.success(&format!("Configuration created at {}", path.display()))?;
    Ok(())
}
