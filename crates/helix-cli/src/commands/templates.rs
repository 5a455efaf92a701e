//! `helix templates`: inspect the bundled set and local overrides.

use std::sync::Arc;

use helix_core::{application::TemplateService, domain::LogicalPath, error::HelixError};

use crate::{
    cli::TemplatesCommands,
    commands::template_source,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(cmd: TemplatesCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        TemplatesCommands::List { prefix } => list(&prefix, config, output),
        TemplatesCommands::Show { path } => show(&path, config, output),
        TemplatesCommands::Path => {
            output.data(&config.override_root()?.display().to_string())?;
            Ok(())
        }
    }
}

fn list(prefix: &str, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let source = Arc::new(template_source(config)?);
    let service = TemplateService::new(source.clone());
    let paths = service.list(prefix)?;

    if paths.is_empty() {
        output.warning(&format!("No bundled templates under '{prefix}'"))?;
        return Ok(());
    }

    output.header(&format!(
        "Templates ({}; overrides from {})",
        paths.len(),
        source.override_root().display()
    ))?;
    for path in &paths {
        output.list_item(path.as_str(), source.is_overridden(path), "overridden")?;
    }
    Ok(())
}

fn show(path: &str, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let path = LogicalPath::parse(path).map_err(HelixError::from)?;
    let service = TemplateService::new(Arc::new(template_source(config)?));
    let body = service.read(&path)?;

    output.data(String::from_utf8_lossy(&body).trim_end_matches('\n'))?;
    Ok(())
}
