use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (value objects carry them out of constructors)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid {entity} name '{name}': {reason}")]
    InvalidName {
        entity: &'static str,
        name: String,
        reason: &'static str,
    },

    #[error("invalid ORM '{0}'. Must be one of: typeorm, prisma, mongoose")]
    InvalidOrm(String),

    #[error("invalid field type '{0}'. Must be one of: string, number, boolean, Date, uuid")]
    InvalidFieldType(String),

    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { entity, .. } => vec![
                format!("{} names must be kebab-case", entity),
                "Use lowercase letters, numbers, and hyphens only".into(),
                "Examples: shop-api, billing, user-profile".into(),
            ],
            Self::InvalidOrm(_) => vec![
                "Supported ORMs:".into(),
                "  • typeorm  - TypeORM (relational, decorator-based)".into(),
                "  • prisma   - Prisma (relational, schema-first)".into(),
                "  • mongoose - Mongoose (MongoDB documents)".into(),
            ],
            Self::InvalidFieldType(_) => vec![
                "Supported field types: string, number, boolean, Date, uuid".into(),
            ],
            Self::EmptyField { field } => vec![format!("Provide a non-empty {}", field)],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
