//! `helix new`: add components to the project in the current directory.
//!
//! Every subcommand reads the module path from `./go.mod`, refuses to
//! overwrite anything, and removes what it wrote if a later entry fails.

use std::path::Path;

use helix_core::{
    domain::{Driver, GenerationPlan, NamingVariants, ParameterRecord, ParameterRecordBuilder},
    error::HelixError,
};
use tracing::{info, instrument};

use crate::{
    cli::NewCommands,
    commands::{
        generator, local_filesystem, missing_directories, refuse_existing, rollback_files, run_plan,
    },
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    scaffold,
};

pub fn execute(cmd: NewCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let root = Path::new(".");
    match cmd {
        NewCommands::Entity { name, driver } => {
            let driver = match driver {
                Some(d) => d.into(),
                None => config.default_driver()?,
            };
            entity(root, &name, driver, config, output)
        }
        NewCommands::Cache { name } => cache(root, &name, config, output),
        NewCommands::Consumer { name, topic } => consumer(root, &name, &topic, config, output),
    }
}

#[instrument(skip_all, fields(entity = %name, %driver))]
fn entity(
    root: &Path,
    name: &str,
    driver: Driver,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    scaffold::validate_name(name)?;
    scaffold::check_reserved(name)?;
    let names = NamingVariants::derive(name);

    let params = base_params(root, &names).driver(driver).build().map_err(HelixError::from)?;
    let plan = scaffold::entity_plan(root, &names)?;
    generate(&plan, params, config, output, &format!("entity {}", names.pascal()))?;

    output.print("")?;
    output.header("Wire it up in cmd/server/main.go:")?;
    output.code(&scaffold::wiring_instructions(&names, driver == Driver::Ent))?;
    if driver == Driver::Ent {
        output.info("Run `go generate ./ent` to build the ent client")?;
    }
    Ok(())
}

#[instrument(skip_all, fields(cache = %name))]
fn cache(root: &Path, name: &str, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    scaffold::validate_name(name)?;
    let names = NamingVariants::derive(name);

    let params = base_params(root, &names).build().map_err(HelixError::from)?;
    let plan = scaffold::cache_plan(root, &names)?;
    generate(&plan, params, config, output, &format!("cache {}", names.pascal()))
}

#[instrument(skip_all, fields(consumer = %name, %topic))]
fn consumer(
    root: &Path,
    name: &str,
    topic: &str,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    scaffold::validate_name(name)?;
    let names = NamingVariants::derive(name);

    let params = base_params(root, &names)
        .extra("topic", topic)
        .build()
        .map_err(HelixError::from)?;
    let plan = scaffold::consumer_plan(root, &names)?;
    generate(&plan, params, config, output, &format!("consumer {}", names.pascal()))
}

fn base_params(
    root: &Path,
    names: &NamingVariants,
) -> ParameterRecordBuilder {
    ParameterRecord::builder()
        .module_path(scaffold::read_module_path(root))
        .entity(names.clone())
}

fn generate(
    plan: &GenerationPlan,
    params: ParameterRecord,
    config: &AppConfig,
    output: &OutputManager,
    what: &str,
) -> CliResult<()> {
    let fs = local_filesystem();
    refuse_existing(fs.as_ref(), plan)?;
    let created = missing_directories(fs.as_ref(), plan);

    let generator = generator(config, fs.clone(), params)?;
    let report = match run_plan(&generator, plan, config.templates.parallel) {
        Ok(report) => report,
        Err(e) => return Err(rollback_files(fs.as_ref(), plan, &created, e)),
    };
    info!(files = report.total(), "{what} generated");

    output.success(&format!("Generated {what}"))?;
    for path in &report.written {
        output.print(&format!("  {}", path.display()))?;
    }
    Ok(())
}
