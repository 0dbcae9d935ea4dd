use crate::core::Storage;
use crate::utils::error::{GpaError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem storage. Relative paths resolve against `base_path`; absolute
/// paths are used as given.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn current_dir() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(Path::new(path));
        tracing::debug!("Reading {}", full_path.display());
        fs::read(&full_path).map_err(|source| GpaError::ReadError {
            path: full_path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_relative_to_base() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("grades.txt"), "CS 101 A 3 John Smith A\n").unwrap();

        let storage = LocalStorage::new(dir.path());
        let data = storage.read_file("grades.txt").unwrap();
        assert_eq!(data, b"CS 101 A 3 John Smith A\n");
    }

    #[test]
    fn test_absolute_path_ignores_base() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("grades.txt");
        fs::write(&file, "x").unwrap();

        let storage = LocalStorage::new("/does/not/matter");
        assert_eq!(storage.read_file(file.to_str().unwrap()).unwrap(), b"x");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        let err = storage.read_file("missing.txt").unwrap_err();
        assert!(matches!(err, GpaError::ReadError { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }
}
