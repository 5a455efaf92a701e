//! Template sources.
//!
//! - [`EmbeddedTemplateSource`]: the bundled set, compiled into the binary
//! - [`LayeredTemplateSource`]: a local override root checked per file,
//!   falling back to the bundled set

mod embedded;
mod layered;

pub use embedded::{BUNDLED_TEMPLATES, EmbeddedTemplateSource};
pub use layered::{LayeredTemplateSource, default_override_root};
