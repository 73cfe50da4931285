//! Template rendering - load a resolved body and substitute the context.

use std::sync::Arc;

use crate::{
    application::{
        ApplicationError,
        ports::{TemplateEngine, TemplateStore},
        services::template_resolver::TemplateLocator,
    },
    domain::RenderContext,
    error::{HexnestError, HexnestResult},
};

/// Renders resolved templates.
///
/// Pure apart from the store read: (locator, context) -> String. A locator
/// that no longer addresses a readable body is a distinct failure
/// ([`ApplicationError::TemplateRead`]) — it should not occur for locators
/// produced by the resolver, but direct callers get an honest error.
pub struct TemplateRenderer {
    store: Arc<dyn TemplateStore>,
    engine: Box<dyn TemplateEngine>,
}

impl TemplateRenderer {
    pub fn new(store: Arc<dyn TemplateStore>, engine: Box<dyn TemplateEngine>) -> Self {
        Self { store, engine }
    }

    pub fn render(&self, locator: &TemplateLocator, context: &RenderContext) -> HexnestResult<String> {
        let body = self.store.load(locator.as_str()).map_err(|e| {
            HexnestError::Application(ApplicationError::TemplateRead {
                path: locator.as_str().to_string(),
                reason: e.to_string(),
            })
        })?;

        self.engine.render(&body, context)
    }
}
