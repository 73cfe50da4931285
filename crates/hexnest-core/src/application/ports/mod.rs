//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `hexnest-adapters` crate provides implementations.

use crate::domain::RenderContext;
use crate::error::HexnestResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `hexnest_adapters::filesystem::LocalFilesystem` (production)
/// - `hexnest_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `create_dir_all` is idempotent: creating an existing directory is not
///   an error.
/// - Listing methods return *names* (final path segments), not full paths;
///   callers own path assembly. No ordering is guaranteed — consumers that
///   need determinism must sort.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> HexnestResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> HexnestResult<()>;

    /// Read a file to a string.
    fn read_to_string(&self, path: &Path) -> HexnestResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Names of the immediate subdirectories of `path`.
    fn list_subdirs(&self, path: &Path) -> HexnestResult<Vec<String>>;

    /// Names of the files directly under `path`.
    fn list_files(&self, path: &Path) -> HexnestResult<Vec<String>>;
}

/// Port for template storage.
///
/// A template path is a store-relative string like
/// `typeorm/resource/entity` or `generic/project/readme`.
///
/// Implemented by:
/// - `hexnest_adapters::template_store::EmbeddedStore` (built-in templates)
/// - `hexnest_adapters::template_store::DirectoryStore` (on-disk overrides)
pub trait TemplateStore: Send + Sync {
    /// Whether a concrete template exists at this path.
    fn contains(&self, path: &str) -> bool;

    /// Load the template body at this path.
    fn load(&self, path: &str) -> HexnestResult<String>;
}

/// Port for placeholder substitution.
///
/// A pure function from (template body, context) to rendered text.
///
/// Implemented by:
/// - `hexnest_adapters::renderer::HandlebarsEngine`
pub trait TemplateEngine: Send + Sync {
    fn render(&self, body: &str, context: &RenderContext) -> HexnestResult<String>;
}

/// Port for reading a project's declared dependencies.
///
/// Feeds ORM detection for the module/resource flows.
///
/// Implemented by:
/// - `hexnest_adapters::manifest::PackageJsonManifest`
pub trait ManifestSource: Send + Sync {
    /// Dependency identifiers declared by the project at `project_root`.
    ///
    /// Returns `Ok(None)` when no manifest is present — an expected outcome,
    /// not an error.
    fn dependencies(&self, project_root: &Path) -> HexnestResult<Option<Vec<String>>>;
}
