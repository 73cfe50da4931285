//! Project structure inspection.
//!
//! Walks a generated project's layout to report which modules and resource
//! entities already exist. Used by the resource flow to validate its target
//! and by interactive prompting to offer a module picklist.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use crate::{
    application::ports::Filesystem,
    domain::ProjectStructureSnapshot,
    error::HexnestResult,
};

/// Suffix that marks a file under `domain/entities` as a resource entity.
const ENTITY_SUFFIX: &str = ".entity.ts";

/// Computes [`ProjectStructureSnapshot`]s on demand.
///
/// Results are always recomputed — the filesystem is the single source of
/// truth and nothing is cached. Listings are sorted so snapshots are
/// deterministic regardless of on-disk order.
pub struct StructureInspector {
    filesystem: Arc<dyn Filesystem>,
}

impl StructureInspector {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    pub fn inspect(&self, project_root: &Path) -> HexnestResult<ProjectStructureSnapshot> {
        if !self.filesystem.exists(project_root) {
            return Ok(ProjectStructureSnapshot::missing());
        }

        let modules_dir = project_root.join("src").join("modules");
        let mut modules = if self.filesystem.exists(&modules_dir) {
            self.filesystem.list_subdirs(&modules_dir)?
        } else {
            Vec::new()
        };
        modules.sort();

        let mut resources_by_module = BTreeMap::new();
        for module in &modules {
            let entities_dir = modules_dir.join(module).join("domain").join("entities");
            let mut resources = Vec::new();

            if self.filesystem.exists(&entities_dir) {
                for file in self.filesystem.list_files(&entities_dir)? {
                    // Non-matching files are not an error, just not resources.
                    if let Some(name) = file.strip_suffix(ENTITY_SUFFIX) {
                        resources.push(name.to_string());
                    }
                }
            }

            resources.sort();
            resources_by_module.insert(module.clone(), resources);
        }

        Ok(ProjectStructureSnapshot {
            exists: true,
            modules,
            resources_by_module,
        })
    }
}
