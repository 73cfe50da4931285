pub mod module;
pub mod project;
pub mod resource;
pub mod structure;

pub use module::ModuleTarget;
pub use project::ProjectTarget;
pub use resource::{FieldSpec, ResourceTarget};
pub use structure::ProjectStructureSnapshot;
