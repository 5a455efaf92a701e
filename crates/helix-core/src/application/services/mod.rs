//! Application services - orchestrate use cases.
//!
//! - [`Generator`]: turns a plan into files
//! - [`TemplateService`]: read-only queries over a template source

pub mod generator;
pub mod template_service;

pub use generator::{EntryOutcome, GenerationReport, Generator};
pub use template_service::TemplateService;
