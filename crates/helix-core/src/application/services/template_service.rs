//! Template Service - read-only queries over a template source.
//!
//! Backs `helix templates list` and `helix templates show`.

use std::sync::Arc;

use crate::{
    application::ports::TemplateSource,
    domain::LogicalPath,
    error::HelixResult,
};

/// Service for template lookups.
pub struct TemplateService {
    source: Arc<dyn TemplateSource>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(source: Arc<dyn TemplateSource>) -> Self {
        Self { source }
    }

    /// Every bundled logical path under `root`, sorted.
    pub fn list(&self, root: &str) -> HelixResult<Vec<LogicalPath>> {
        let mut paths = Vec::new();
        self.source.walk(root, &mut |path| {
            paths.push(path.clone());
            Ok(())
        })?;
        Ok(paths)
    }

    /// Raw template content, as the generator would see it.
    pub fn read(&self, path: &LogicalPath) -> HelixResult<Vec<u8>> {
        self.source.read(path)
    }
}
