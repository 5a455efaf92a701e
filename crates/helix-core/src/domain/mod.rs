//! Domain layer: pure values with no I/O.
//!
//! - [`naming`]: one raw identifier → every casing the templates need
//! - [`params`]: the read-only record a generation pass renders against
//! - [`plan`]: (logical template path → destination) manifests
//! - [`logical_path`]: the validated template identifier shared by every source

pub mod error;
pub mod logical_path;
pub mod naming;
pub mod params;
pub mod plan;

pub use error::{DomainError, ErrorCategory};
pub use logical_path::LogicalPath;
pub use naming::NamingVariants;
pub use params::{BUILTIN_FIELDS, Driver, ParameterRecord, ParameterRecordBuilder, PortAllocation};
pub use plan::{GenerationPlan, PLACEHOLDER_SUFFIX, PlanEntry};
