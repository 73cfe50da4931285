//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use hexnest_core::{application::ports::Filesystem, error::HexnestResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> HexnestResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> HexnestResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> HexnestResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_subdirs(&self, path: &Path) -> HexnestResult<Vec<String>> {
        let entries = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            let file_type = entry
                .file_type()
                .map_err(|e| map_io_error(path, e, "stat directory entry"))?;
            if file_type.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    fn list_files(&self, path: &Path) -> HexnestResult<Vec<String>> {
        let entries = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            let file_type = entry
                .file_type()
                .map_err(|e| map_io_error(path, e, "stat directory entry"))?;
            if file_type.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> hexnest_core::error::HexnestError {
    use hexnest_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("a/b");
        let file = dir.join("c.txt");

        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&file, "hello").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(fs.read_to_string(&file).unwrap(), "hello");
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("x");

        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();
        assert!(fs.exists(&dir));
    }

    #[test]
    fn listings_separate_dirs_from_files() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        fs.create_dir_all(&tmp.path().join("sub")).unwrap();
        fs.write_file(&tmp.path().join("file.txt"), "").unwrap();

        assert_eq!(fs.list_subdirs(tmp.path()).unwrap(), ["sub".to_string()]);
        assert_eq!(fs.list_files(tmp.path()).unwrap(), ["file.txt".to_string()]);
    }

    #[test]
    fn read_missing_file_is_filesystem_error() {
        let fs = LocalFilesystem::new();
        assert!(fs.read_to_string(Path::new("/nonexistent/xyz")).is_err());
    }
}
