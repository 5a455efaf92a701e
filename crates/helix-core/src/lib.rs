//! Helix Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers for the Helix service scaffolder.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            helix-cli (CLI)              │
//! │   (builds plans + parameter records)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (Generator, TemplateService)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (TemplateSource, Renderer, Filesystem) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     helix-adapters (Infrastructure)     │
//! │ (LayeredTemplateSource, JinjaRenderer)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use helix_core::prelude::*;
//!
//! let params = ParameterRecord::builder()
//!     .module_path("github.com/acme/svc-orders")
//!     .entity(NamingVariants::derive("order-item"))
//!     .build()?;
//!
//! let plan = GenerationPlan::new()
//!     .with("templates/entity.tmpl", "internal/ent/schema/order_item.go")?;
//!
//! let generator = Generator::new(source, renderer, filesystem, Arc::new(params));
//! generator.process_plan(&plan)?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Public API - what external crates should use.
pub mod prelude {
    pub use crate::application::{
        ApplicationError, EntryOutcome, GenerationReport, Generator, TemplateService,
        ports::{Filesystem, TemplateRenderer, TemplateSource},
    };
    pub use crate::domain::{
        DomainError, Driver, GenerationPlan, LogicalPath, NamingVariants, ParameterRecord,
        PlanEntry, PortAllocation,
    };
    pub use crate::error::{ErrorCategory, HelixError, HelixResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
