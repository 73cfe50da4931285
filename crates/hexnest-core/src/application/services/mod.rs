pub mod generation_service;
pub mod orm_detector;
pub mod structure_inspector;
pub mod template_renderer;
pub mod template_resolver;

pub use generation_service::{GenerationService, ModuleSummary, ProjectSummary, ResourceSummary};
pub use orm_detector::OrmDetector;
pub use structure_inspector::StructureInspector;
pub use template_renderer::TemplateRenderer;
pub use template_resolver::{TemplateLocator, TemplateResolver};
