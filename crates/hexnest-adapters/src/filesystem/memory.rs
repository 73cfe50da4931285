//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use hexnest_core::{application::ports::Filesystem, error::HexnestResult};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle for assertions while
/// the service under test owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All file paths, unordered (testing helper).
    pub fn file_paths(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Number of files written.
    pub fn file_count(&self) -> usize {
        self.inner.read().unwrap().files.len()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> HexnestResult<()> {
        let mut inner = self.inner.write().unwrap();

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> HexnestResult<()> {
        let mut inner = self.inner.write().unwrap();

        // Mirrors the real filesystem: the parent must exist.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(hexnest_core::application::ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> HexnestResult<String> {
        let inner = self.inner.read().unwrap();
        inner.files.get(path).cloned().ok_or_else(|| {
            hexnest_core::application::ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn list_subdirs(&self, path: &Path) -> HexnestResult<Vec<String>> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .directories
            .iter()
            .filter(|d| d.parent() == Some(path))
            .filter_map(|d| d.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect())
    }

    fn list_files(&self, path: &Path) -> HexnestResult<Vec<String>> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .files
            .keys()
            .filter(|f| f.parent() == Some(path))
            .filter_map(|f| f.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("/a")).unwrap();
        assert!(fs.write_file(Path::new("/a/b.txt"), "x").is_ok());
    }

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/a/b/c")).unwrap();

        assert!(fs.exists(Path::new("/a")));
        assert!(fs.exists(Path::new("/a/b")));
        assert!(fs.exists(Path::new("/a/b/c")));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let view = fs.clone();

        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file(Path::new("/a/x.txt"), "shared").unwrap();

        assert_eq!(view.read_file(Path::new("/a/x.txt")).unwrap(), "shared");
    }

    #[test]
    fn listings_are_immediate_children_only() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/a/b/c")).unwrap();
        fs.write_file(Path::new("/a/top.txt"), "").unwrap();
        fs.write_file(Path::new("/a/b/nested.txt"), "").unwrap();

        assert_eq!(fs.list_subdirs(Path::new("/a")).unwrap(), ["b".to_string()]);
        assert_eq!(fs.list_files(Path::new("/a")).unwrap(), ["top.txt".to_string()]);
    }
}
