//! Template store backed by an on-disk directory.
//!
//! Lets users override the builtin templates with their own collection:
//!
//! ```env
//! HEXNEST_TEMPLATES_DIR=./templates
//! ```
//!
//! The directory mirrors the store layout (`typeorm/…`, `prisma/…`,
//! `mongoose/…`, `generic/…`), one `.hbs` file per template path.

use std::path::PathBuf;

use hexnest_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::HexnestResult,
};

/// Environment variable selecting a custom template directory.
pub const TEMPLATES_DIR_ENV: &str = "HEXNEST_TEMPLATES_DIR";

/// Store that reads template bodies from a directory tree.
pub struct DirectoryStore {
    base: PathBuf,
}

impl DirectoryStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Build a store from `HEXNEST_TEMPLATES_DIR`, if set.
    pub fn from_env() -> Option<Self> {
        std::env::var(TEMPLATES_DIR_ENV).ok().map(Self::new)
    }

    fn file_path(&self, path: &str) -> PathBuf {
        self.base.join(format!("{path}.hbs"))
    }
}

impl TemplateStore for DirectoryStore {
    fn contains(&self, path: &str) -> bool {
        self.file_path(path).is_file()
    }

    fn load(&self, path: &str) -> HexnestResult<String> {
        let file = self.file_path(path);
        std::fs::read_to_string(&file).map_err(|e| {
            ApplicationError::TemplateRead {
                path: path.to_string(),
                reason: format!("{}: {}", file.display(), e),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_hbs_files_under_base() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("generic/project");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("readme.hbs"), "# {{projectName}}").unwrap();

        let store = DirectoryStore::new(tmp.path());
        assert!(store.contains("generic/project/readme"));
        assert_eq!(store.load("generic/project/readme").unwrap(), "# {{projectName}}");
    }

    #[test]
    fn missing_template_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(tmp.path());

        assert!(!store.contains("generic/project/readme"));
        let err = store.load("generic/project/readme").unwrap_err();
        assert!(err.to_string().contains("generic/project/readme"));
    }
}
