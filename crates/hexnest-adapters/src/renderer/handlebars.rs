//! Handlebars-based template engine.
//!
//! Templates are one-shot: each body is rendered directly without prior
//! registration, which fits the manifest-driven pipeline (every template is
//! rendered at most a handful of times per invocation).

use handlebars::{Handlebars, no_escape};
use tracing::instrument;

use hexnest_core::{
    application::{ApplicationError, ports::TemplateEngine},
    domain::RenderContext,
    error::HexnestResult,
};

/// Template engine backed by the `handlebars` crate.
pub struct HandlebarsEngine {
    registry: Handlebars<'static>,
}

impl HandlebarsEngine {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        // Generated output is source code, not HTML.
        registry.register_escape_fn(no_escape);
        Self { registry }
    }
}

impl Default for HandlebarsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for HandlebarsEngine {
    #[instrument(skip_all)]
    fn render(&self, body: &str, context: &RenderContext) -> HexnestResult<String> {
        self.registry.render_template(body, context).map_err(|e| {
            ApplicationError::RenderingFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}
