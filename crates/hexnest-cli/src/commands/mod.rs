//! Command handlers, one module per subcommand.

pub mod completions;
pub mod module;
pub mod new;
pub mod resource;

use std::sync::Arc;

use hexnest_adapters::{
    DirectoryStore, EmbeddedStore, HandlebarsEngine, LocalFilesystem, PackageJsonManifest,
};
use hexnest_core::application::{GenerationService, ports::TemplateStore};

/// Wire the production adapters into a [`GenerationService`].
///
/// Every service is stateless, so each command handler builds its own and
/// drops it on exit — no shared wiring, no globals.
pub fn build_service() -> GenerationService {
    let store: Arc<dyn TemplateStore> = match DirectoryStore::from_env() {
        Some(dir_store) => Arc::new(dir_store),
        None => Arc::new(EmbeddedStore::new()),
    };
    let filesystem = Arc::new(LocalFilesystem::new());
    let manifests = Box::new(PackageJsonManifest::new(filesystem.clone()));

    GenerationService::new(store, Box::new(HandlebarsEngine::new()), filesystem, manifests)
}
