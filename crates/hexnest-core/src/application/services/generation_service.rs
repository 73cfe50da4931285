//! Generation Service - main application orchestrator.
//!
//! This service coordinates the three creation flows (project, module,
//! resource), each with the same shape:
//! 1. Collision check (before anything is written)
//! 2. ORM selection (from the target, or detected from the project)
//! 3. Render context assembly
//! 4. Fixed manifest of (target path, logical template key) pairs:
//!    resolve + render + write each, creating parent directories as needed
//!
//! Writes are intentionally not transactional: if entry 5 of a manifest
//! fails, entries 1-4 remain on disk and the error propagates. The collision
//! check guarantees a failed run never touched pre-existing work.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ManifestSource, TemplateEngine, TemplateStore},
        services::{
            orm_detector::OrmDetector,
            structure_inspector::StructureInspector,
            template_renderer::TemplateRenderer,
            template_resolver::TemplateResolver,
        },
    },
    domain::{
        FieldSpec, ModuleTarget, Orm, ProjectStructureSnapshot, ProjectTarget, RenderContext,
        ResourceTarget,
    },
    error::HexnestResult,
};

/// Store kind assumed when generating into an existing project; only the
/// project flow collects an explicit one.
const DEFAULT_DATABASE: &str = "postgres";

/// Scaffold directories created for a new project, relative to its root.
const PROJECT_DIRS: &[&str] = &[
    "src",
    "src/domain",
    "src/application",
    "src/application/commands",
    "src/application/queries",
    "src/application/use-cases",
    "src/application/dtos",
    "src/infrastructure",
    "src/infrastructure/persistence",
    "src/infrastructure/presentation",
    "src/modules",
    "test",
];

/// Project manifest: (target path relative to project root, logical key).
///
/// package.json is the only ORM-specific entry; the rest resolve through the
/// generic fallback.
const PROJECT_FILES: &[(&str, &str)] = &[
    ("package.json", "project/package.json"),
    ("tsconfig.json", "project/tsconfig.json"),
    ("nest-cli.json", "project/nest-cli.json"),
    (".gitignore", "project/gitignore"),
    ("README.md", "project/readme"),
    ("src/main.ts", "project/main"),
    ("src/app.module.ts", "project/app.module"),
];

/// Layered directories created for a new module, relative to the module root.
const MODULE_DIRS: &[&str] = &[
    "domain",
    "domain/entities",
    "domain/repositories",
    "domain/value-objects",
    "application",
    "application/commands",
    "application/queries",
    "application/use-cases",
    "application/dtos",
    "infrastructure",
    "infrastructure/persistence",
    "infrastructure/presentation",
];

/// Module manifest: definition file plus an empty entity index.
const MODULE_FILES: &[(&str, &str)] = &[
    ("module.module.ts", "module/module"),
    ("domain/entities/index.ts", "module/entity.index"),
];

/// Resource manifest: 15 artifacts fanned out across the module's layers.
///
/// Entity and repository implementation are ORM-specific; everything else is
/// generic. Order is fixed so partial-failure diagnostics are deterministic;
/// targets do not depend on each other.
fn resource_manifest(name: &str) -> Vec<(String, &'static str)> {
    vec![
        (format!("domain/entities/{name}.entity.ts"), "resource/entity"),
        (
            format!("domain/repositories/{name}.repository.ts"),
            "resource/repository.interface",
        ),
        (
            format!("infrastructure/persistence/{name}.repository.ts"),
            "resource/repository.impl",
        ),
        (
            format!("application/commands/create-{name}.command.ts"),
            "resource/create-command",
        ),
        (
            format!("application/commands/update-{name}.command.ts"),
            "resource/update-command",
        ),
        (
            format!("application/commands/delete-{name}.command.ts"),
            "resource/delete-command",
        ),
        (format!("application/queries/get-{name}.query.ts"), "resource/get-query"),
        (format!("application/queries/list-{name}s.query.ts"), "resource/list-query"),
        (
            format!("application/use-cases/create-{name}.use-case.ts"),
            "resource/create-use-case",
        ),
        (
            format!("application/use-cases/update-{name}.use-case.ts"),
            "resource/update-use-case",
        ),
        (
            format!("application/use-cases/delete-{name}.use-case.ts"),
            "resource/delete-use-case",
        ),
        (
            format!("application/use-cases/get-{name}.use-case.ts"),
            "resource/get-use-case",
        ),
        (
            format!("application/use-cases/list-{name}s.use-case.ts"),
            "resource/list-use-case",
        ),
        (format!("application/dtos/{name}.dto.ts"), "resource/dto"),
        (
            format!("infrastructure/presentation/{name}.controller.ts"),
            "resource/controller",
        ),
    ]
}

// ── Summaries ─────────────────────────────────────────────────────────────────

/// What `create_project` reports back for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSummary {
    pub name: String,
    pub orm: Orm,
    pub database: String,
    pub path: PathBuf,
}

/// What `create_module` reports back for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleSummary {
    pub name: String,
    pub project_root: PathBuf,
    pub features: Vec<String>,
}

/// What `create_resource` reports back for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSummary {
    pub name: String,
    pub module_name: String,
    pub fields: Vec<FieldSpec>,
}

// ── Service ───────────────────────────────────────────────────────────────────

/// Main generation service.
///
/// Stateless given its adapters; construct one per invocation and drop it.
pub struct GenerationService {
    resolver: TemplateResolver,
    renderer: TemplateRenderer,
    detector: OrmDetector,
    inspector: StructureInspector,
    filesystem: Arc<dyn Filesystem>,
}

impl GenerationService {
    /// Create a new generation service with the given adapters.
    pub fn new(
        store: Arc<dyn TemplateStore>,
        engine: Box<dyn TemplateEngine>,
        filesystem: Arc<dyn Filesystem>,
        manifests: Box<dyn ManifestSource>,
    ) -> Self {
        Self {
            resolver: TemplateResolver::new(Arc::clone(&store)),
            renderer: TemplateRenderer::new(store, engine),
            detector: OrmDetector::new(manifests),
            inspector: StructureInspector::new(Arc::clone(&filesystem)),
            filesystem,
        }
    }

    /// Create a new project.
    #[instrument(skip_all, fields(project = %target.name(), orm = %target.orm()))]
    pub fn create_project(&self, target: &ProjectTarget) -> HexnestResult<ProjectSummary> {
        let root = target.root_path();

        if self.filesystem.exists(root) {
            return Err(ApplicationError::ProjectExists {
                path: root.to_path_buf(),
            }
            .into());
        }

        self.filesystem.create_dir_all(root)?;
        for dir in PROJECT_DIRS {
            self.filesystem.create_dir_all(&root.join(dir))?;
        }

        let context = RenderContext::for_project(target);
        for (rel_path, key) in PROJECT_FILES {
            self.generate_file(root, rel_path, key, &context)?;
        }

        info!(path = %root.display(), "project generated");
        Ok(ProjectSummary {
            name: target.name().to_string(),
            orm: target.orm(),
            database: target.database().to_string(),
            path: root.to_path_buf(),
        })
    }

    /// Create a module inside an existing project.
    #[instrument(skip_all, fields(module = %target.name()))]
    pub fn create_module(&self, target: &ModuleTarget) -> HexnestResult<ModuleSummary> {
        let module_root = Self::module_path(target.project_root(), target.name());

        if self.filesystem.exists(&module_root) {
            return Err(ApplicationError::ModuleExists {
                name: target.name().to_string(),
            }
            .into());
        }

        let orm = self
            .detector
            .detect(target.project_root())?
            .unwrap_or(Orm::TypeOrm);
        let project_name = Self::project_name_of(target.project_root());
        let context = RenderContext::for_module(&project_name, target.name(), orm, DEFAULT_DATABASE);

        for dir in MODULE_DIRS {
            self.filesystem.create_dir_all(&module_root.join(dir))?;
        }
        for (rel_path, key) in MODULE_FILES {
            self.generate_file(&module_root, rel_path, key, &context)?;
        }

        info!(path = %module_root.display(), %orm, "module generated");
        Ok(ModuleSummary {
            name: target.name().to_string(),
            project_root: target.project_root().to_path_buf(),
            features: target.features().to_vec(),
        })
    }

    /// Create a resource (entity with CRUD plumbing) inside a module.
    #[instrument(skip_all, fields(resource = %target.name(), module = %target.module_name()))]
    pub fn create_resource(&self, target: &ResourceTarget) -> HexnestResult<ResourceSummary> {
        let snapshot = self.inspector.inspect(target.project_root())?;
        if !snapshot.exists {
            return Err(ApplicationError::ProjectNotFound {
                path: target.project_root().to_path_buf(),
            }
            .into());
        }
        if snapshot.modules.is_empty() {
            return Err(ApplicationError::NoModules.into());
        }
        if !snapshot.has_module(target.module_name()) {
            return Err(ApplicationError::ModuleNotFound {
                name: target.module_name().to_string(),
            }
            .into());
        }

        let module_root = Self::module_path(target.project_root(), target.module_name());
        let entity_file = module_root
            .join("domain")
            .join("entities")
            .join(format!("{}.entity.ts", target.name()));
        if self.filesystem.exists(&entity_file) {
            return Err(ApplicationError::ResourceExists {
                name: target.name().to_string(),
                module: target.module_name().to_string(),
            }
            .into());
        }

        let orm = self
            .detector
            .detect(target.project_root())?
            .unwrap_or(Orm::TypeOrm);
        let project_name = Self::project_name_of(target.project_root());
        let context = RenderContext::for_resource(
            &project_name,
            target.module_name(),
            target.name(),
            target.fields(),
            orm,
            DEFAULT_DATABASE,
        );

        for (rel_path, key) in resource_manifest(target.name()) {
            self.generate_file(&module_root, &rel_path, key, &context)?;
        }

        info!(path = %module_root.display(), %orm, "resource generated");
        Ok(ResourceSummary {
            name: target.name().to_string(),
            module_name: target.module_name().to_string(),
            fields: target.fields().to_vec(),
        })
    }

    /// Snapshot the module/resource layout of a generated project.
    pub fn structure(&self, project_root: &Path) -> HexnestResult<ProjectStructureSnapshot> {
        self.inspector.inspect(project_root)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Resolve, render, and write one manifest entry.
    fn generate_file(
        &self,
        base: &Path,
        rel_path: &str,
        key: &str,
        context: &RenderContext,
    ) -> HexnestResult<()> {
        let locator = self.resolver.resolve(key, context.orm)?;
        let content = self.renderer.render(&locator, context)?;

        let path = base.join(rel_path);
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&path, &content)
    }

    fn module_path(project_root: &Path, module_name: &str) -> PathBuf {
        project_root.join("src").join("modules").join(module_name)
    }

    /// Project name for module/resource contexts: the root's final segment.
    fn project_name_of(project_root: &Path) -> String {
        project_root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The end-to-end flow tests live in hexnest-adapters/tests, where the
    // real memory adapters are available. Here we pin the manifest tables
    // themselves.

    #[test]
    fn resource_manifest_has_fifteen_entries() {
        assert_eq!(resource_manifest("invoice").len(), 15);
    }

    #[test]
    fn resource_manifest_paths_are_keyed_on_name() {
        let manifest = resource_manifest("invoice");
        let paths: Vec<&str> = manifest.iter().map(|(p, _)| p.as_str()).collect();

        assert!(paths.contains(&"domain/entities/invoice.entity.ts"));
        assert!(paths.contains(&"application/queries/list-invoices.query.ts"));
        assert!(paths.contains(&"infrastructure/presentation/invoice.controller.ts"));
    }

    #[test]
    fn resource_manifest_orm_specific_entries() {
        let manifest = resource_manifest("invoice");
        let orm_specific: Vec<&str> = manifest
            .iter()
            .filter(|(_, key)| matches!(*key, "resource/entity" | "resource/repository.impl"))
            .map(|(p, _)| p.as_str())
            .collect();

        assert_eq!(
            orm_specific,
            [
                "domain/entities/invoice.entity.ts",
                "infrastructure/persistence/invoice.repository.ts",
            ]
        );
    }

    #[test]
    fn entity_is_first_in_manifest_order() {
        // The collision check keys on the entity file; writing it first
        // keeps a partially failed run detectable as "exists".
        let manifest = resource_manifest("invoice");
        assert_eq!(manifest[0].1, "resource/entity");
    }

    #[test]
    fn project_files_cover_manifest_and_scaffolding() {
        let keys: Vec<&str> = PROJECT_FILES.iter().map(|(_, k)| *k).collect();
        assert!(keys.contains(&"project/package.json"));
        assert!(keys.contains(&"project/main"));
        assert_eq!(PROJECT_FILES.len(), 7);
    }

    #[test]
    fn project_name_of_takes_final_segment() {
        assert_eq!(
            GenerationService::project_name_of(Path::new("/tmp/out/shop-api")),
            "shop-api"
        );
        assert_eq!(GenerationService::project_name_of(Path::new("/")), "");
    }
}
