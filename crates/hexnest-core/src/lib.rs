//! Hexnest Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Hexnest
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          hexnest-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerationService, TemplateResolver)  │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Store, Filesystem, Engine,     │
//! │  ManifestSource)                        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     hexnest-adapters (Infrastructure)   │
//! │ (EmbeddedStore, LocalFilesystem, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProjectTarget, ModuleTarget, Orm,     │
//! │   RenderContext)                        │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hexnest_core::{
//!     application::GenerationService,
//!     domain::{Orm, ProjectTarget},
//! };
//!
//! // 1. Create target (validated at construction)
//! let target = ProjectTarget::new("shop-api", Orm::TypeOrm, "postgres", "/tmp/out/shop-api").unwrap();
//!
//! // 2. Use application service (with injected adapters)
//! let service = GenerationService::new(store, engine, filesystem, manifests);
//! service.create_project(&target).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationService, ModuleSummary, ProjectSummary, ResourceSummary,
        ports::{Filesystem, ManifestSource, TemplateEngine, TemplateStore},
    };
    pub use crate::domain::{
        FieldSpec, FieldType, ModuleTarget, Orm, ProjectStructureSnapshot, ProjectTarget,
        RenderContext, ResourceTarget,
    };
    pub use crate::error::{HexnestError, HexnestResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
