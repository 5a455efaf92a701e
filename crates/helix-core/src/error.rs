//! Unified error handling for Helix Core.
//!
//! [`HelixError`] wraps domain and application errors. The
//! [`HelixError::Generation`] variant is what the generator returns for a
//! failed plan entry: the underlying cause plus both paths involved, so a
//! caller can report the failing artifact and clean up without re-deriving
//! anything.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Helix Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HelixError {
    /// Errors from the domain layer (invalid values).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer, not yet tied to a plan entry.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// A plan entry failed.
    #[error("generation failed for '{logical_path}' -> {}: {source}", .dest_path.display())]
    Generation {
        logical_path: String,
        dest_path: PathBuf,
        #[source]
        source: ApplicationError,
    },

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl HelixError {
    /// Tag an application error with the entry it happened on.
    pub fn generation(
        logical_path: impl Into<String>,
        dest_path: impl Into<PathBuf>,
        source: ApplicationError,
    ) -> Self {
        Self::Generation {
            logical_path: logical_path.into(),
            dest_path: dest_path.into(),
            source,
        }
    }

    /// The underlying application error, if any.
    pub fn application_error(&self) -> Option<&ApplicationError> {
        match self {
            Self::Application(e) | Self::Generation { source: e, .. } => Some(e),
            _ => None,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Generation {
                dest_path, source, ..
            } => {
                let mut s = vec![format!("While generating {}", dest_path.display())];
                s.extend(source.suggestions());
                s
            }
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Helix".into(),
                "Please report this issue at: https://github.com/godamri/helix-cli/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) | Self::Generation { source: e, .. } => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Core errors are terminal for the entry; none is retried.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Template,
    Io,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type HelixResult<T> = Result<T, HelixError>;
