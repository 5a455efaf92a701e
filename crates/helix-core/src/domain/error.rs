// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Errors raised while building domain values (paths, parameter records).
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid logical template path '{path}': {reason}")]
    InvalidLogicalPath { path: String, reason: String },

    #[error("unknown persistence driver '{value}' (expected 'ent' or 'pgx')")]
    UnknownDriver { value: String },

    #[error("required parameter missing: {field}")]
    MissingParameter { field: &'static str },

    #[error("parameter '{key}' shadows a built-in template field")]
    ReservedParameter { key: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidLogicalPath { path, .. } => vec![
                format!("Logical path: {path}"),
                "Logical paths are relative and use '/' separators, e.g. templates/app/go.mod.tmpl"
                    .into(),
            ],
            Self::UnknownDriver { .. } => vec![
                "Supported drivers:".into(),
                "  • ent - type-safe ORM repositories".into(),
                "  • pgx - raw SQL repositories".into(),
            ],
            Self::MissingParameter { field } => vec![
                format!("Set '{field}' before building the parameter record"),
                "This is likely a bug in the calling command".into(),
            ],
            Self::ReservedParameter { key } => vec![
                format!("Rename the extra parameter '{key}'"),
                "Built-in names such as entity_name or driver cannot be overridden".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidLogicalPath { .. } | Self::UnknownDriver { .. } => {
                ErrorCategory::Validation
            }
            Self::MissingParameter { .. } | Self::ReservedParameter { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
