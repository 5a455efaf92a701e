//! `helix init`: create a new service project.

use std::path::PathBuf;

use helix_core::{
    domain::{Driver, NamingVariants, ParameterRecord},
    error::HelixError,
};
use tracing::{debug, info, instrument};

use crate::{
    cli::InitArgs,
    commands::{generator, local_filesystem, rollback_root, run_plan},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    scaffold::{self, SERVICE_PREFIX},
};

/// Execute `helix init`.
///
/// 1. Derive the project name and the first entity from NAME
/// 2. Refuse an existing directory
/// 3. Allocate ports and build the parameter record
/// 4. Generate the project plan; remove the whole root on failure
/// 5. Print next steps
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(args: InitArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let project_name = scaffold::service_name(&args.name, args.keep_name);
    scaffold::validate_name(&project_name)?;

    let entity = project_name
        .strip_prefix(SERVICE_PREFIX)
        .unwrap_or(&project_name)
        .to_owned();
    scaffold::validate_name(&entity)?;
    scaffold::check_reserved(&entity)?;

    let root = PathBuf::from(&project_name);
    if root.exists() {
        return Err(CliError::ProjectExists { path: root });
    }

    let driver = match args.driver {
        Some(d) => d.into(),
        None => config.default_driver()?,
    };
    let names = NamingVariants::derive(&entity);
    let ports = scaffold::allocate_ports(&mut rand::thread_rng());
    let module_path = format!(
        "{}/{project_name}",
        config.project.module_prefix.trim_end_matches('/')
    );

    debug!(%driver, %module_path, ?ports, "resolved project parameters");

    let params = ParameterRecord::builder()
        .project_name(&project_name)
        .module_path(&module_path)
        .ports(ports)
        .entity(names.clone())
        .driver(driver)
        .build()
        .map_err(HelixError::from)?;

    let plan = scaffold::project_plan(&root, &names)?;
    let fs = local_filesystem();
    let generator = generator(config, fs.clone(), params)?;

    output.info(&format!("Creating {project_name} ({driver})..."))?;

    let report = match run_plan(&generator, &plan, config.templates.parallel) {
        Ok(report) => report,
        Err(e) => return Err(rollback_root(fs.as_ref(), &root, e)),
    };

    info!(
        files = report.total(),
        placeholders = report.placeholders,
        "project generated"
    );

    output.success(&format!(
        "Created {} with {} files",
        root.display(),
        report.total()
    ))?;
    output.print("")?;
    output.header("Ports")?;
    output.print(&format!("  app      {}", ports.app_port))?;
    output.print(&format!("  grpc     {}", ports.grpc_port))?;
    output.print(&format!("  db       {}", ports.db_port))?;
    output.print(&format!("  db (dev) {}", ports.db_dev_port))?;
    output.print("")?;
    output.header("Next steps")?;
    output.print(&format!("  cd {project_name}"))?;
    output.print("  go mod tidy")?;
    if driver == Driver::Ent {
        output.print("  go generate ./ent")?;
    }
    output.print("  make run")?;

    Ok(())
}
