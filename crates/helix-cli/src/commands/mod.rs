//! Command handlers, one module per subcommand.
//!
//! The helpers below wire adapters into a [`Generator`] and implement the
//! caller-side cleanup that the core leaves to us.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    sync::Arc,
};

use helix_adapters::{EmbeddedTemplateSource, JinjaRenderer, LayeredTemplateSource, LocalFilesystem};
use helix_core::{
    application::{Filesystem, GenerationReport, Generator},
    domain::{GenerationPlan, ParameterRecord},
    error::HelixError,
};
use tracing::{debug, info, warn};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod completions;
pub mod config;
pub mod init;
pub mod new;
pub mod templates;

/// Bundled templates behind the configured override root.
pub(crate) fn template_source(config: &AppConfig) -> CliResult<LayeredTemplateSource> {
    Ok(LayeredTemplateSource::new(
        EmbeddedTemplateSource::new(),
        config.override_root()?,
    ))
}

pub(crate) fn generator(
    config: &AppConfig,
    filesystem: Arc<dyn Filesystem>,
    params: ParameterRecord,
) -> CliResult<Generator> {
    Ok(Generator::new(
        Arc::new(template_source(config)?),
        Arc::new(JinjaRenderer::new()),
        filesystem,
        Arc::new(params),
    ))
}

pub(crate) fn local_filesystem() -> Arc<dyn Filesystem> {
    Arc::new(LocalFilesystem::new())
}

pub(crate) fn run_plan(
    generator: &Generator,
    plan: &GenerationPlan,
    parallel: bool,
) -> Result<GenerationReport, HelixError> {
    if parallel {
        generator.process_plan_parallel(plan)
    } else {
        generator.process_plan(plan)
    }
}

/// Fail before writing anything if a destination is already present.
pub(crate) fn refuse_existing(fs: &dyn Filesystem, plan: &GenerationPlan) -> CliResult<()> {
    match plan.destinations().find(|dest| fs.exists(dest)) {
        Some(dest) => Err(CliError::FileExists {
            path: dest.to_path_buf(),
        }),
        None => Ok(()),
    }
}

/// Remove a whole destination root after a failed run.
pub(crate) fn rollback_root(fs: &dyn Filesystem, root: &Path, cause: HelixError) -> CliError {
    if !fs.exists(root) {
        return CliError::Core(cause);
    }
    match fs.remove_dir_all(root) {
        Ok(()) => {
            info!(path = %root.display(), "removed partial output");
            CliError::Core(cause)
        }
        Err(e) => {
            warn!(path = %root.display(), error = %e, "rollback failed");
            CliError::RollbackFailed {
                path: root.to_path_buf(),
                reason: e.to_string(),
                source: cause,
            }
        }
    }
}

/// Ancestors of the plan's destinations that do not exist yet, deepest first.
pub(crate) fn missing_directories(fs: &dyn Filesystem, plan: &GenerationPlan) -> Vec<PathBuf> {
    let mut dirs = BTreeSet::new();
    for dest in plan.destinations() {
        for dir in dest.ancestors().skip(1) {
            if dir.as_os_str().is_empty() || fs.exists(dir) || !dirs.insert(dir.to_path_buf()) {
                break;
            }
        }
    }

    let mut dirs: Vec<_> = dirs.into_iter().collect();
    dirs.sort_by_key(|d| std::cmp::Reverse(d.components().count()));
    dirs
}

/// Remove the files of `plan` and the directories in `created` after a
/// failed run into an existing tree.
///
/// Only valid after [`refuse_existing`] passed: every destination present
/// now was written by this run. `created` comes from
/// [`missing_directories`] taken before the run; a directory that is not
/// empty by then is left alone.
pub(crate) fn rollback_files(
    fs: &dyn Filesystem,
    plan: &GenerationPlan,
    created: &[PathBuf],
    cause: HelixError,
) -> CliError {
    let mut failed = None;
    for dest in plan.destinations().filter(|dest| fs.exists(dest)) {
        if let Err(e) = fs.remove_file(dest) {
            warn!(path = %dest.display(), error = %e, "rollback failed");
            failed.get_or_insert((dest.to_path_buf(), e.to_string()));
        }
    }

    for dir in created.iter().filter(|dir| fs.exists(dir)) {
        if let Err(e) = fs.remove_dir(dir) {
            debug!(path = %dir.display(), error = %e, "directory kept");
        }
    }

    match failed {
        None => CliError::Core(cause),
        Some((path, reason)) => CliError::RollbackFailed {
            path,
            reason,
            source: cause,
        },
    }
}
