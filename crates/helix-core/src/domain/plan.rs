//! Generation plans: which template goes to which destination.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use super::{DomainError, LogicalPath};

/// File-name suffix marking a placeholder entry.
///
/// Placeholder entries are written as zero-length files so that otherwise
/// empty directories (e.g. `migrations/`) survive in version control.
pub const PLACEHOLDER_SUFFIX: &str = ".keep";

/// One (template, destination) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub source: LogicalPath,
    pub destination: PathBuf,
}

impl PlanEntry {
    /// Whether this entry bypasses templating and materialises as an empty
    /// file. Either side carrying the sentinel suffix is enough.
    pub fn is_placeholder(&self) -> bool {
        self.source.file_name().ends_with(PLACEHOLDER_SUFFIX)
            || self
                .destination
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(PLACEHOLDER_SUFFIX))
    }
}

/// The full set of files one command intends to materialise.
///
/// Keyed by logical source path, so a template appears at most once.
/// Destination uniqueness is the caller's responsibility; it is not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationPlan {
    entries: BTreeMap<LogicalPath, PathBuf>,
}

impl GenerationPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, validating the logical path. A second insert for the
    /// same source replaces the first.
    pub fn insert(
        &mut self,
        source: &str,
        destination: impl Into<PathBuf>,
    ) -> Result<&mut Self, DomainError> {
        let source = LogicalPath::parse(source)?;
        self.entries.insert(source, destination.into());
        Ok(self)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, source: &str, destination: impl Into<PathBuf>) -> Result<Self, DomainError> {
        self.insert(source, destination)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in logical-path order.
    pub fn entries(&self) -> impl Iterator<Item = PlanEntry> + '_ {
        self.entries.iter().map(|(source, destination)| PlanEntry {
            source: source.clone(),
            destination: destination.clone(),
        })
    }

    pub fn destinations(&self) -> impl Iterator<Item = &Path> {
        self.entries.values().map(PathBuf::as_path)
    }
}

impl<'a> IntoIterator for &'a GenerationPlan {
    type Item = PlanEntry;
    type IntoIter = Box<dyn Iterator<Item = PlanEntry> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.entries())
    }
}
