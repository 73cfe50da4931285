use std::path::{Path, PathBuf};

use crate::domain::{casing::to_pascal_case, error::DomainError, validation};

/// A module to be generated inside an existing project.
///
/// `project_root` points at what the caller believes is a generated project;
/// its existence is checked by the generation step, not at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleTarget {
    name: String,
    project_root: PathBuf,
    features: Vec<String>,
}

impl ModuleTarget {
    pub fn new(
        name: impl Into<String>,
        project_root: impl Into<PathBuf>,
        features: Vec<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        validation::validate_identifier("module", &name)?;

        Ok(Self {
            name,
            project_root: project_root.into(),
            features,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_pascal(&self) -> String {
        to_pascal_case(&self.name)
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }
}
