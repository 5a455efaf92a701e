//! Infrastructure adapters for Helix.
//!
//! This crate implements the ports defined in `helix_core::application::ports`.
//! It holds every I/O concern and the bundled template set.

pub mod filesystem;
pub mod renderer;
pub mod template_source;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::JinjaRenderer;
pub use template_source::{
    BUNDLED_TEMPLATES, EmbeddedTemplateSource, LayeredTemplateSource, default_override_root,
};
