//! Error handling for the Helix CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use helix_core::error::HelixError;

// Re-export so callers only need `use crate::error::*`.
pub use helix_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A service, entity, cache or consumer name is unusable.
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// The name collides with a framework or layout directory.
    #[error("'{name}' is a reserved name")]
    ReservedName { name: String },

    /// Project directory already exists.
    #[error("Project already exists at {}", .path.display())]
    ProjectExists { path: PathBuf },

    /// A file the command would generate is already present.
    #[error("Refusing to overwrite existing file {}", .path.display())]
    FileExists { path: PathBuf },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `helix-core`.
    #[error("Generation failed: {0}")]
    Core(#[from] HelixError),

    /// Generation failed and the partial output could not be removed.
    #[error("Generation failed and cleanup of {} failed: {reason}", .path.display())]
    RollbackFailed {
        path: PathBuf,
        reason: String,
        #[source]
        source: HelixError,
    },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { .. } => vec![
                "Use lower-case letters, digits and hyphens, starting with a letter".into(),
                "Examples: order, order-item, user-created".into(),
            ],

            Self::ReservedName { name } => vec![
                format!("'{name}' would clash with generated package or directory names"),
                "Use a real domain name (e.g. svc-user, svc-order)".into(),
            ],

            Self::ProjectExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Choose a different project name".into(),
                format!("Remove the existing directory: rm -rf {}", path.display()),
            ],

            Self::FileExists { path } => vec![
                format!("'{}' was generated before or written by hand", path.display()),
                "Pick another name, or delete the file to regenerate it".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Show the effective settings: helix config show".into(),
                "Create a default config: helix config init".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::RollbackFailed { path, source, .. } => {
                let mut s = vec![format!(
                    "Partial output was left at {}; remove it by hand",
                    path.display()
                )];
                s.extend(source.suggestions());
                s
            }

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::ReservedName { .. }
            | Self::ProjectExists { .. }
            | Self::FileExists { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Template => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Io | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::RollbackFailed { .. } | Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Coloured report for a terminal: message, cause chain when
    /// `verbose`, then suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: String, style: fn(&str) -> String| -> String {
            if color { style(&text) } else { text }
        };

        let mut out = format!(
            "\n{}\n",
            paint(format!("Error: {self}"), |s| s.red().bold().to_string())
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&paint(format!("  Caused by: {err}"), |s| s.dimmed().to_string()));
                out.push('\n');
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push('\n');
            out.push_str(&paint("Suggestions:".into(), |s| s.yellow().bold().to_string()));
            out.push('\n');
            for line in suggestions {
                out.push_str(&format!("  {line}\n"));
            }
        }

        if !verbose {
            out.push('\n');
            out.push_str(&paint(
                "Use -v / --verbose for more details.".into(),
                |s| s.dimmed().to_string(),
            ));
            out.push('\n');
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

/// Attach a context message to `std::io` failures at call-sites.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}
