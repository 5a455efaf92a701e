//! Local filesystem adapter using std::fs.

use std::io::{self, Write};
use std::path::Path;

use helix_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{HelixError, HelixResult},
};
use tempfile::NamedTempFile;

/// Mode of every generated file; the temp file starts out owner-only.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Production filesystem implementation using `std::fs`.
///
/// Writes go to a temporary file next to the destination and are renamed
/// into place, so a failed write never leaves a partial file behind.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> HelixResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> HelixResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp =
            NamedTempFile::new_in(dir).map_err(|e| map_io_error(path, e, "create temp file"))?;
        tmp.write_all(content)
            .map_err(|e| map_io_error(path, e, "write file"))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(FILE_MODE))
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        tmp.persist(path)
            .map_err(|e| map_io_error(path, e.error, "replace file"))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_file(&self, path: &Path) -> HelixResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn remove_dir(&self, path: &Path) -> HelixResult<()> {
        std::fs::remove_dir(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn remove_dir_all(&self, path: &Path) -> HelixResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> HelixError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
