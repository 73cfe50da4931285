//! Template store backed by the builtin template set.

use std::collections::HashMap;

use hexnest_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::HexnestResult,
};

use crate::builtin_templates;

/// Store over the templates compiled into the binary.
///
/// This is the production default; `DirectoryStore` takes over when the user
/// points `HEXNEST_TEMPLATES_DIR` at a custom collection.
pub struct EmbeddedStore {
    bodies: HashMap<&'static str, &'static str>,
}

impl EmbeddedStore {
    pub fn new() -> Self {
        Self {
            bodies: builtin_templates::all().iter().copied().collect(),
        }
    }

    /// Number of builtin templates.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for EmbeddedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for EmbeddedStore {
    fn contains(&self, path: &str) -> bool {
        self.bodies.contains_key(path)
    }

    fn load(&self, path: &str) -> HexnestResult<String> {
        self.bodies
            .get(path)
            .map(|body| body.to_string())
            .ok_or_else(|| {
                ApplicationError::TemplateRead {
                    path: path.to_string(),
                    reason: "no builtin template at this path".into(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_is_loaded() {
        let store = EmbeddedStore::new();
        assert!(!store.is_empty());
        assert!(store.contains("generic/project/readme"));
        assert!(store.contains("typeorm/resource/entity"));
    }

    #[test]
    fn load_returns_body() {
        let store = EmbeddedStore::new();
        let body = store.load("generic/project/readme").unwrap();
        assert!(body.contains("{{projectName}}"));
    }

    #[test]
    fn unknown_path_is_template_read_error() {
        let store = EmbeddedStore::new();
        assert!(!store.contains("generic/unknown"));
        assert!(store.load("generic/unknown").is_err());
    }
}
