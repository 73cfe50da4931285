//! package.json dependency reading for ORM detection.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::warn;

use hexnest_core::{
    application::ports::{Filesystem, ManifestSource},
    error::HexnestResult,
};

/// The subset of package.json the detector cares about.
#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: serde_json::Map<String, serde_json::Value>,
}

/// Reads dependency identifiers from a project's `package.json`.
///
/// A missing manifest yields `None`. So does an unparseable one: a
/// hand-edited manifest must not block the module/resource flows, it only
/// costs the user the detection convenience (generation falls back to the
/// default ORM).
pub struct PackageJsonManifest {
    filesystem: Arc<dyn Filesystem>,
}

impl PackageJsonManifest {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }
}

impl ManifestSource for PackageJsonManifest {
    fn dependencies(&self, project_root: &Path) -> HexnestResult<Option<Vec<String>>> {
        let path = project_root.join("package.json");
        if !self.filesystem.exists(&path) {
            return Ok(None);
        }

        let raw = self.filesystem.read_to_string(&path)?;
        match serde_json::from_str::<PackageJson>(&raw) {
            Ok(manifest) => Ok(Some(manifest.dependencies.keys().cloned().collect())),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unparseable package.json, skipping detection");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;

    fn manifest_with(content: Option<&str>) -> PackageJsonManifest {
        let fs = MemoryFilesystem::new();
        if let Some(content) = content {
            fs.create_dir_all(Path::new("/p")).unwrap();
            fs.write_file(Path::new("/p/package.json"), content).unwrap();
        }
        PackageJsonManifest::new(Arc::new(fs))
    }

    #[test]
    fn reads_dependency_keys() {
        let source = manifest_with(Some(
            r#"{"name":"shop-api","dependencies":{"@nestjs/typeorm":"^10.0.0","typeorm":"^0.3.17"}}"#,
        ));
        let mut deps = source.dependencies(Path::new("/p")).unwrap().unwrap();
        deps.sort();
        assert_eq!(deps, ["@nestjs/typeorm", "typeorm"]);
    }

    #[test]
    fn missing_manifest_is_none() {
        let source = manifest_with(None);
        assert_eq!(source.dependencies(Path::new("/p")).unwrap(), None);
    }

    #[test]
    fn manifest_without_dependencies_is_empty_list() {
        let source = manifest_with(Some(r#"{"name":"shop-api"}"#));
        assert_eq!(
            source.dependencies(Path::new("/p")).unwrap(),
            Some(Vec::new())
        );
    }

    #[test]
    fn malformed_manifest_is_none_not_error() {
        let source = manifest_with(Some("{not json"));
        assert_eq!(source.dependencies(Path::new("/p")).unwrap(), None);
    }
}
