use std::collections::BTreeMap;

/// Snapshot of a generated project's module/resource layout.
///
/// Derived on demand by scanning the filesystem; never cached — every call
/// recomputes it. Module and resource lists are sorted so results are
/// deterministic regardless of on-disk order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectStructureSnapshot {
    pub exists: bool,
    pub modules: Vec<String>,
    pub resources_by_module: BTreeMap<String, Vec<String>>,
}

impl ProjectStructureSnapshot {
    /// Snapshot for a project root that does not exist.
    pub fn missing() -> Self {
        Self::default()
    }

    /// Resources recorded for one module, if the module is present.
    pub fn resources_in(&self, module: &str) -> Option<&[String]> {
        self.resources_by_module.get(module).map(Vec::as_slice)
    }

    pub fn has_module(&self, module: &str) -> bool {
        self.modules.iter().any(|m| m == module)
    }
}
