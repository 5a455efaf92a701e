use std::fmt;
use std::path::{Path, PathBuf};

use super::DomainError;

/// A stable, slash-separated identifier for a template.
///
/// The same logical path names a file in the bundled default set and in the
/// user's override directory, independent of the platform's separator.
///
/// Invariants:
/// - non-empty
/// - relative (no leading `/`)
/// - `/` is the only separator (no `\`)
/// - no empty, `.` or `..` segments
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogicalPath(String);

impl LogicalPath {
    /// Validate and wrap a logical path.
    pub fn parse(path: impl Into<String>) -> Result<Self, DomainError> {
        let path = path.into();
        let reject = |reason: &str| DomainError::InvalidLogicalPath {
            path: path.clone(),
            reason: reason.to_owned(),
        };

        if path.is_empty() {
            return Err(reject("path is empty"));
        }
        if path.starts_with('/') {
            return Err(reject("path must be relative"));
        }
        if path.contains('\\') {
            return Err(reject("use '/' as the separator"));
        }
        if path
            .split('/')
            .any(|seg| seg.is_empty() || seg == "." || seg == "..")
        {
            return Err(reject("empty, '.' or '..' segment"));
        }

        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final segment, e.g. `main.go.tmpl`.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Whether this path sits at or below `prefix` (segment-wise).
    ///
    /// `templates/app` contains `templates/app/go.mod.tmpl` but not
    /// `templates/application.yml`.
    pub fn is_under(&self, prefix: &str) -> bool {
        let prefix = prefix.trim_end_matches('/');
        prefix.is_empty()
            || self.0 == prefix
            || self
                .0
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Resolve against a filesystem root, one segment at a time.
    pub fn to_fs_path(&self, root: &Path) -> PathBuf {
        self.0.split('/').fold(root.to_path_buf(), |acc, seg| acc.join(seg))
    }
}

impl AsRef<str> for LogicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for LogicalPath {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LogicalPath {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
