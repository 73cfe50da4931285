//! Domain value objects: Orm, FieldType.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string representations,
//! and their `FromStr` parsers. Everything that *uses* an ORM tag (template
//! directory selection, dependency signatures) lives with the service that
//! needs it.
//!
//! The ORM tag is a closed enum from the validation boundary onward so every
//! downstream match over it is exhaustively checked.

use crate::domain::error::DomainError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ── Orm ──────────────────────────────────────────────────────────────────────

/// A supported persistence technology.
///
/// Drives both template-directory selection (`typeorm/…` vs `generic/…`) and
/// the dependency signatures used for detection in existing projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orm {
    TypeOrm,
    Prisma,
    Mongoose,
}

impl Orm {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TypeOrm => "typeorm",
            Self::Prisma => "prisma",
            Self::Mongoose => "mongoose",
        }
    }

    /// All supported ORMs, in detection-priority order.
    pub const fn all() -> [Orm; 3] {
        [Self::TypeOrm, Self::Prisma, Self::Mongoose]
    }
}

impl fmt::Display for Orm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orm {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "typeorm" => Ok(Self::TypeOrm),
            "prisma" => Ok(Self::Prisma),
            "mongoose" => Ok(Self::Mongoose),
            other => Err(DomainError::InvalidOrm(other.to_string())),
        }
    }
}

// ── FieldType ────────────────────────────────────────────────────────────────

/// The type of a resource field.
///
/// Wire spellings match the prompt vocabulary (`Date` is capitalized, the
/// rest lowercase) so rendered artifacts read like hand-written NestJS code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldType {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "Date")]
    Date,
    #[serde(rename = "uuid")]
    Uuid,
}

impl FieldType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "Date",
            Self::Uuid => "uuid",
        }
    }

    /// The TypeScript type rendered into generated properties.
    ///
    /// UUIDs are strings at the TypeScript level; the ORM-specific entity
    /// templates are responsible for column-level UUID handling.
    pub const fn ts_type(&self) -> &'static str {
        match self {
            Self::String | Self::Uuid => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "Date",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" | "bool" => Ok(Self::Boolean),
            "date" => Ok(Self::Date),
            "uuid" => Ok(Self::Uuid),
            other => Err(DomainError::InvalidFieldType(other.to_string())),
        }
    }
}
