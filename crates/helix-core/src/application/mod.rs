//! Application layer for Helix.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (Generator, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Naming and parameter rules live in `crate::domain`; this layer only
//! moves bytes between the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{EntryOutcome, GenerationReport, Generator, TemplateService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateRenderer, TemplateSource};

pub use error::ApplicationError;
