//! Application layer errors.
//!
//! These are the failures a single template can hit on its way from a
//! source to disk. None of them is retried. The [`Generator`] tags them
//! with the logical and destination paths before they leave the core.
//!
//! [`Generator`]: crate::application::Generator

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while resolving, rendering or writing a template.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The logical path exists in neither the override root nor the bundled set.
    #[error("template not found: {logical_path}")]
    TemplateNotFound { logical_path: String },

    /// The template body is not valid template syntax.
    #[error("failed to parse template '{template_path}': {cause}")]
    TemplateParse { template_path: String, cause: String },

    /// The template parsed but failed while substituting values.
    #[error("failed to execute template '{template_path}': {cause}")]
    TemplateExecution { template_path: String, cause: String },

    /// Directory creation, read or write failed.
    #[error("filesystem error at {}: {reason}", .path.display())]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { logical_path } => vec![
                format!("No bundled or local template named '{logical_path}'"),
                "Try: helix templates list".into(),
                "Check the file name inside your override directory (helix templates path)".into(),
            ],
            Self::TemplateParse { template_path, .. } => vec![
                format!("Template '{template_path}' has a syntax error"),
                "If you override this template locally, fix or remove your copy".into(),
            ],
            Self::TemplateExecution { template_path, .. } => vec![
                format!("Template '{template_path}' failed while rendering"),
                "Check that every field it uses is a known parameter".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::TemplateParse { .. } | Self::TemplateExecution { .. } => ErrorCategory::Template,
            Self::Filesystem { .. } => ErrorCategory::Io,
        }
    }
}
