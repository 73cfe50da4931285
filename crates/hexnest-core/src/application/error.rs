//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Orm;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Module already exists inside the project.
    #[error("Module {name} already exists in project")]
    ModuleExists { name: String },

    /// Resource already exists inside the module.
    #[error("Resource {name} already exists in module {module}")]
    ResourceExists { name: String, module: String },

    /// No generated project at the given path.
    #[error("Project not found at {path}")]
    ProjectNotFound { path: PathBuf },

    /// Target module does not exist in the project.
    #[error("Module {name} not found in project")]
    ModuleNotFound { name: String },

    /// Project has no modules at all (resource flow precondition).
    #[error("No modules found in project. Create a module first.")]
    NoModules,

    /// Resolver exhausted both the ORM-specific and generic search paths.
    #[error("Template not found: {key} for ORM: {orm}")]
    TemplateNotFound { key: String, orm: Orm },

    /// A resolved template body could not be read.
    #[error("Failed to read template {path}: {reason}")]
    TemplateRead { path: String, reason: String },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed (permissions, disk full, etc.).
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Nothing was overwritten".into(),
                "Choose a different project name or path".into(),
            ],
            Self::ModuleExists { name } => vec![
                format!("Module '{}' is already generated", name),
                "Nothing was overwritten".into(),
                "Choose a different module name".into(),
            ],
            Self::ResourceExists { name, module } => vec![
                format!("Resource '{}' is already generated in '{}'", name, module),
                "Nothing was overwritten".into(),
            ],
            Self::ProjectNotFound { path } => vec![
                format!("No project found at: {}", path.display()),
                "Run 'hexnest new' first, or pass --project-path".into(),
            ],
            Self::ModuleNotFound { name } => vec![
                format!("Module '{}' does not exist", name),
                "Run 'hexnest module' to create it first".into(),
            ],
            Self::NoModules => vec![
                "The project has no modules yet".into(),
                "Run 'hexnest module <name>' before generating resources".into(),
            ],
            Self::TemplateNotFound { key, orm } => vec![
                format!("Neither {}/{} nor generic/{} is packaged", orm, key, key),
                "This indicates a packaging defect, not a usage error".into(),
                "If HEXNEST_TEMPLATES_DIR is set, check that directory".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } | Self::ModuleExists { .. } | Self::ResourceExists { .. } => {
                ErrorCategory::Conflict
            }
            Self::ProjectNotFound { .. }
            | Self::ModuleNotFound { .. }
            | Self::NoModules
            | Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::TemplateRead { .. } | Self::RenderingFailed { .. } | Self::FilesystemError { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
