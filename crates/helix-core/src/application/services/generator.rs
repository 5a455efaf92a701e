//! Generator - the orchestrator that turns a plan into files.
//!
//! For each plan entry:
//! 1. Resolve template content through the [`TemplateSource`]
//! 2. Render it with the shared [`ParameterRecord`]
//! 3. Ensure the destination's parent directories exist
//! 4. Write the rendered bytes, replacing any existing file
//!
//! Placeholder entries (see [`PLACEHOLDER_SUFFIX`](crate::domain::PLACEHOLDER_SUFFIX)) skip steps 1 and 2 and
//! are written as empty files.
//!
//! The generator never rolls anything back. It reports the first failure
//! tagged with both paths; the caller owns the destination root and decides
//! what to delete.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateRenderer, TemplateSource},
    domain::{GenerationPlan, LogicalPath, ParameterRecord, PlanEntry},
    error::{HelixError, HelixResult},
};

/// What happened to one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    Rendered,
    Placeholder,
}

/// Summary of a successful plan run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub rendered: usize,
    pub placeholders: usize,
    /// Destinations in plan order.
    pub written: Vec<PathBuf>,
}

impl GenerationReport {
    fn record(&mut self, destination: PathBuf, outcome: EntryOutcome) {
        match outcome {
            EntryOutcome::Rendered => self.rendered += 1,
            EntryOutcome::Placeholder => self.placeholders += 1,
        }
        self.written.push(destination);
    }

    pub fn total(&self) -> usize {
        self.rendered + self.placeholders
    }
}

/// Renders plan entries to disk.
///
/// Every collaborator is injected, and the parameter record is shared
/// read-only for the generator's whole lifetime.
pub struct Generator {
    source: Arc<dyn TemplateSource>,
    renderer: Arc<dyn TemplateRenderer>,
    filesystem: Arc<dyn Filesystem>,
    params: Arc<ParameterRecord>,
}

impl Generator {
    /// Create a generator with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use helix_core::application::Generator;
    ///
    /// let generator = Generator::new(
    ///     Arc::new(source),     // impl TemplateSource
    ///     Arc::new(renderer),   // impl TemplateRenderer
    ///     Arc::new(filesystem), // impl Filesystem
    ///     Arc::new(params),
    /// );
    /// generator.process_plan(&plan)?;
    /// ```
    pub fn new(
        source: Arc<dyn TemplateSource>,
        renderer: Arc<dyn TemplateRenderer>,
        filesystem: Arc<dyn Filesystem>,
        params: Arc<ParameterRecord>,
    ) -> Self {
        Self {
            source,
            renderer,
            filesystem,
            params,
        }
    }

    /// Materialise a single template at `dest`.
    #[instrument(skip_all, fields(source = %source, dest = %dest.display()))]
    pub fn process_file(&self, source: &LogicalPath, dest: &Path) -> HelixResult<EntryOutcome> {
        self.process_entry(&PlanEntry {
            source: source.clone(),
            destination: dest.to_path_buf(),
        })
    }

    /// Run every entry in plan order, stopping at the first failure.
    #[instrument(skip_all, fields(entries = plan.len()))]
    pub fn process_plan(&self, plan: &GenerationPlan) -> HelixResult<GenerationReport> {
        let mut report = GenerationReport::default();

        for entry in plan {
            let outcome = self.process_entry(&entry).inspect_err(|e| {
                warn!(source = %entry.source, error = %e, "plan entry failed");
            })?;
            report.record(entry.destination, outcome);
        }

        info!(
            rendered = report.rendered,
            placeholders = report.placeholders,
            "plan completed"
        );
        Ok(report)
    }

    /// Run every entry on the rayon pool.
    ///
    /// Produces the same files as [`process_plan`](Self::process_plan).
    /// All entries are attempted; if any fail, the error of the first
    /// failing entry in plan order is returned.
    #[instrument(skip_all, fields(entries = plan.len()))]
    pub fn process_plan_parallel(&self, plan: &GenerationPlan) -> HelixResult<GenerationReport> {
        let entries: Vec<PlanEntry> = plan.entries().collect();

        let results: Vec<HelixResult<EntryOutcome>> = entries
            .par_iter()
            .map(|entry| self.process_entry(entry))
            .collect();

        let mut report = GenerationReport::default();
        for (entry, result) in entries.into_iter().zip(results) {
            match result {
                Ok(outcome) => report.record(entry.destination, outcome),
                Err(e) => {
                    warn!(source = %entry.source, error = %e, "plan entry failed");
                    return Err(e);
                }
            }
        }

        info!(
            rendered = report.rendered,
            placeholders = report.placeholders,
            "plan completed"
        );
        Ok(report)
    }

    fn process_entry(&self, entry: &PlanEntry) -> HelixResult<EntryOutcome> {
        let tag = |e: HelixError| tag_error(e, entry);

        if entry.is_placeholder() {
            debug!(dest = %entry.destination.display(), "writing placeholder");
            self.ensure_parent(&entry.destination).map_err(tag)?;
            self.filesystem
                .write_file(&entry.destination, &[])
                .map_err(tag)?;
            return Ok(EntryOutcome::Placeholder);
        }

        let body = self.source.read(&entry.source).map_err(tag)?;
        let rendered = self
            .renderer
            .execute(&entry.source, &body, &self.params)
            .map_err(tag)?;

        self.ensure_parent(&entry.destination).map_err(tag)?;
        self.filesystem
            .write_file(&entry.destination, &rendered)
            .map_err(tag)?;

        debug!(
            source = %entry.source,
            dest = %entry.destination.display(),
            bytes = rendered.len(),
            "rendered"
        );
        Ok(EntryOutcome::Rendered)
    }

    fn ensure_parent(&self, dest: &Path) -> HelixResult<()> {
        match dest.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.filesystem.create_dir_all(parent),
            _ => Ok(()),
        }
    }
}

/// Attach entry context to an untagged application error.
fn tag_error(err: HelixError, entry: &PlanEntry) -> HelixError {
    match err {
        HelixError::Application(source) => {
            HelixError::generation(entry.source.as_str(), &entry.destination, source)
        }
        other => other,
    }
}
