//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `helix-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by the generator, implemented by infrastructure
//!   - `TemplateSource`: Template lookup and enumeration
//!   - `TemplateRenderer`: Template rendering
//!   - `Filesystem`: File operations

pub mod output;

pub use output::{Filesystem, TemplateRenderer, TemplateSource};
