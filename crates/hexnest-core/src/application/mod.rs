//! Application layer for Hexnest.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerationService, resolver,
//!   renderer, detector, inspector)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    GenerationService, ModuleSummary, OrmDetector, ProjectSummary, ResourceSummary,
    StructureInspector, TemplateLocator, TemplateRenderer, TemplateResolver,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ManifestSource, TemplateEngine, TemplateStore};

pub use error::ApplicationError;
