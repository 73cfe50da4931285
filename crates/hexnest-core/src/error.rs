//! Unified error handling for Hexnest Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Hexnest Core operations.
///
/// This enum wraps all possible errors that can occur when using hexnest-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum HexnestError {
    /// Errors from the domain layer (business logic violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl HexnestError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Hexnest".into(),
                "Please report this issue at: https://github.com/cosecruz/hexnest/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type HexnestResult<T> = Result<T, HexnestError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> HexnestResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> HexnestResult<T> {
        self.map_err(|e| HexnestError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Orm;

    #[test]
    fn domain_error_maps_to_validation_category() {
        let err: HexnestError = DomainError::InvalidOrm("sequelize".into()).into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn template_not_found_maps_to_not_found_category() {
        let err: HexnestError = ApplicationError::TemplateNotFound {
            key: "resource/entity".into(),
            orm: Orm::Prisma,
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn context_wraps_foreign_errors() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let wrapped = result.context("reading template");
        assert!(matches!(wrapped, Err(HexnestError::Internal { .. })));
    }
}
