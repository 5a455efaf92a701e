//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generator needs from the outside world.
//! The `helix-adapters` crate provides implementations.

use crate::domain::{LogicalPath, ParameterRecord};
use crate::error::HelixResult;
use std::path::Path;

/// Port for template content.
///
/// Implemented by:
/// - `helix_adapters::EmbeddedTemplateSource` (bundled defaults only)
/// - `helix_adapters::LayeredTemplateSource` (local override, then bundled)
///
/// ## Contract
///
/// - `read` never writes and never touches the network.
/// - `walk` enumerates the bundled set only. Local overrides replace single
///   files on `read`; they never add entries to `walk`.
pub trait TemplateSource: Send + Sync {
    /// Resolve a logical path to its content.
    ///
    /// Fails with `ApplicationError::TemplateNotFound` naming the logical
    /// path when no source has it.
    fn read(&self, path: &LogicalPath) -> HelixResult<Vec<u8>>;

    /// Visit every bundled logical path at or below `root`, in sorted order.
    ///
    /// An error returned by `visit` stops the walk and is propagated.
    fn walk(
        &self,
        root: &str,
        visit: &mut dyn FnMut(&LogicalPath) -> HelixResult<()>,
    ) -> HelixResult<()>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `helix_adapters::JinjaRenderer` (minijinja, strict undefined)
pub trait TemplateRenderer: Send + Sync {
    /// Render `body` against `params`.
    ///
    /// Pure: no filesystem access. Malformed syntax is reported as
    /// `ApplicationError::TemplateParse`; a failure while substituting
    /// (e.g. an unknown field) as `ApplicationError::TemplateExecution`.
    fn execute(
        &self,
        template_path: &LogicalPath,
        body: &[u8],
        params: &ParameterRecord,
    ) -> HelixResult<Vec<u8>>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `helix_adapters::LocalFilesystem` (production)
/// - `helix_adapters::MemoryFilesystem` (testing)
///
/// `create_dir_all` must succeed when the directory already exists,
/// including when another worker created it a moment earlier.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> HelixResult<()>;

    /// Write content to a file, replacing any existing file.
    fn write_file(&self, path: &Path, content: &[u8]) -> HelixResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a file.
    fn remove_file(&self, path: &Path) -> HelixResult<()>;

    /// Remove an empty directory; fails if anything is left inside.
    fn remove_dir(&self, path: &Path) -> HelixResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> HelixResult<()>;
}
