//! Local-override, bundled-default template source.
//!
//! `read` checks `<override_root>/<logical path>` for each file and uses it
//! when it is a regular file. Anything else falls through to the bundled
//! set. `walk` only enumerates the bundled set: an override can replace a
//! file but cannot add one.

use std::{
    fs,
    path::{Path, PathBuf},
};

use helix_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::LogicalPath,
    error::HelixResult,
};
use tracing::debug;

use super::EmbeddedTemplateSource;

/// `~/.helix/templates`, or `None` when the home directory is unknown.
pub fn default_override_root() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".helix").join("templates"))
}

#[derive(Debug, Clone)]
pub struct LayeredTemplateSource {
    embedded: EmbeddedTemplateSource,
    override_root: PathBuf,
}

impl LayeredTemplateSource {
    /// The override root is fixed for the lifetime of the source.
    pub fn new(embedded: EmbeddedTemplateSource, override_root: impl Into<PathBuf>) -> Self {
        Self {
            embedded,
            override_root: override_root.into(),
        }
    }

    pub fn override_root(&self) -> &Path {
        &self.override_root
    }

    /// Where an override for `path` would live.
    pub fn override_path(&self, path: &LogicalPath) -> PathBuf {
        path.to_fs_path(&self.override_root)
    }

    /// Whether `read(path)` would return the local copy.
    pub fn is_overridden(&self, path: &LogicalPath) -> bool {
        self.override_path(path).is_file()
    }
}

impl TemplateSource for LayeredTemplateSource {
    fn read(&self, path: &LogicalPath) -> HelixResult<Vec<u8>> {
        let local = self.override_path(path);

        if local.is_file() {
            debug!(path = %local.display(), "using local template override");
            return fs::read(&local).map_err(|e| {
                ApplicationError::Filesystem {
                    path: local.clone(),
                    reason: format!("Failed to read template override: {e}"),
                }
                .into()
            });
        }

        self.embedded.read(path)
    }

    fn walk(
        &self,
        root: &str,
        visit: &mut dyn FnMut(&LogicalPath) -> HelixResult<()>,
    ) -> HelixResult<()> {
        self.embedded.walk(root, visit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    static DEFAULTS: &[(&str, &str)] = &[
        ("templates/x.tmpl", "default x"),
        ("templates/y.tmpl", "default y"),
    ];

    fn lp(s: &str) -> LogicalPath {
        LogicalPath::parse(s).unwrap()
    }

    fn layered(root: &Path) -> LayeredTemplateSource {
        LayeredTemplateSource::new(EmbeddedTemplateSource::from_static(DEFAULTS), root)
    }

    #[test]
    fn override_file_wins() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("templates")).unwrap();
        fs::write(dir.path().join("templates/x.tmpl"), "local x").unwrap();

        let source = layered(dir.path());
        assert_eq!(source.read(&lp("templates/x.tmpl")).unwrap(), b"local x");
        assert!(source.is_overridden(&lp("templates/x.tmpl")));
        // same run, different file: still the default
        assert_eq!(source.read(&lp("templates/y.tmpl")).unwrap(), b"default y");
        assert!(!source.is_overridden(&lp("templates/y.tmpl")));
    }

    #[test]
    fn directory_at_override_path_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("templates/x.tmpl")).unwrap();

        let source = layered(dir.path());
        assert_eq!(source.read(&lp("templates/x.tmpl")).unwrap(), b"default x");
    }

    #[test]
    fn missing_override_root_falls_back() {
        let dir = TempDir::new().unwrap();
        let source = layered(&dir.path().join("does-not-exist"));
        assert_eq!(source.read(&lp("templates/x.tmpl")).unwrap(), b"default x");
    }

    #[test]
    fn walk_ignores_extra_override_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("templates")).unwrap();
        fs::write(dir.path().join("templates/z.tmpl"), "local only").unwrap();

        let source = layered(dir.path());
        let mut seen = Vec::new();
        source
            .walk("templates", &mut |p| {
                seen.push(p.to_string());
                Ok(())
            })
            .unwrap();
        assert_eq!(seen, vec!["templates/x.tmpl", "templates/y.tmpl"]);
    }
}
