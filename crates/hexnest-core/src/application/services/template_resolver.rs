//! Template resolution - the ORM-specific-else-generic fallback search.
//!
//! This is the key selection policy of the whole pipeline: ORM-specific
//! templates override a shared generic baseline, so most artifacts (e.g. a
//! command class) are defined once generically while only storage-touching
//! artifacts (entity, repository implementation, project manifest files)
//! carry per-ORM variants.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::{
    application::{ApplicationError, ports::TemplateStore},
    domain::Orm,
    error::HexnestResult,
};

/// Address of a concrete template inside the store.
///
/// Produced only by [`TemplateResolver::resolve`]; holding one is evidence
/// the store answered `contains` for it at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLocator(String);

impl TemplateLocator {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves logical template keys to concrete store paths.
pub struct TemplateResolver {
    store: Arc<dyn TemplateStore>,
}

impl TemplateResolver {
    pub fn new(store: Arc<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Resolve a logical key for an ORM.
    ///
    /// Search order:
    /// 1. `{orm}/{key}` — the ORM-specific variant wins if present.
    /// 2. `generic/{key}` — shared baseline.
    /// 3. Otherwise [`ApplicationError::TemplateNotFound`] naming both.
    pub fn resolve(&self, key: &str, orm: Orm) -> HexnestResult<TemplateLocator> {
        let specific = format!("{}/{}", orm.as_str(), key);
        if self.store.contains(&specific) {
            debug!(template = %specific, "resolved ORM-specific template");
            return Ok(TemplateLocator(specific));
        }

        let generic = format!("generic/{key}");
        if self.store.contains(&generic) {
            debug!(template = %generic, "resolved generic template");
            return Ok(TemplateLocator(generic));
        }

        Err(ApplicationError::TemplateNotFound {
            key: key.to_string(),
            orm,
        }
        .into())
    }
}
