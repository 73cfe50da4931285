//! Centralized domain validation.
//!
//! Entity constructors call these predicates; an invalid target can never
//! exist as a live value.

use crate::domain::error::DomainError;

/// Validate a kebab-case identifier (`^[a-z0-9-]+$`, non-empty).
pub fn validate_identifier(entity: &'static str, name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName {
            entity,
            name: name.to_string(),
            reason: "cannot be empty",
        });
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(DomainError::InvalidName {
            entity,
            name: name.to_string(),
            reason: "must be kebab-case (lowercase letters, numbers, and hyphens only)",
        });
    }

    Ok(())
}

/// Validate that a free-text field is non-empty.
pub fn validate_non_empty(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    Ok(())
}
