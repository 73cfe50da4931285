//! Core domain layer for Hexnest.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O, templating, and rendering concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: Set once via constructor-time validation; any
//!   "update" is a new value

pub mod casing;
pub mod context;
pub mod entities;
pub mod error;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use context::{FieldView, RenderContext};
pub use entities::{FieldSpec, ModuleTarget, ProjectStructureSnapshot, ProjectTarget, ResourceTarget};
pub use error::{DomainError, ErrorCategory};
pub use value_objects::{FieldType, Orm};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn orm_parses_correctly() {
        assert_eq!(Orm::from_str("typeorm").unwrap(), Orm::TypeOrm);
        assert_eq!(Orm::from_str("Mongoose").unwrap(), Orm::Mongoose);
        assert!(Orm::from_str("sequelize").is_err());
    }

    // ========================================================================
    // Target Construction Tests
    // ========================================================================

    #[test]
    fn invalid_targets_cannot_exist() {
        assert!(ProjectTarget::new("Bad Name", Orm::TypeOrm, "postgres", "/tmp/x").is_err());
        assert!(ModuleTarget::new("bad name", "/tmp/x", vec![]).is_err());
        assert!(ResourceTarget::new("ok", "Bad", "/tmp/x", vec![]).is_err());
    }

    #[test]
    fn targets_are_immutable_values() {
        let a = ProjectTarget::new("shop-api", Orm::Prisma, "postgres", "/tmp/a").unwrap();
        let b = a.clone();
        assert_eq!(a, b);
    }

    // ========================================================================
    // Casing Tests
    // ========================================================================

    #[test]
    fn pascal_case_properties() {
        assert_eq!(casing::to_pascal_case("user-profile"), "UserProfile");
        assert_eq!(casing::to_pascal_case("a"), "A");
        assert_eq!(casing::to_pascal_case(""), "");
    }
}
