//! Existence checks and reads behind a trait
//!
//! The loader never touches `std::fs` directly. [`FsSource`] is the real
//! filesystem; [`MemorySource`] holds files in a map so the fallback policy
//! can be exercised without a disk.

use std::collections::HashMap;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Read-only access to candidate files.
pub trait DataSource: Send + Sync {
    /// Whether a regular file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Open `path` for reading.
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send + '_>>;
}

/// The local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl DataSource for FsSource {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send + '_>> {
        let file = std::fs::File::open(path)?;
        Ok(Box::new(io::BufReader::new(file)))
    }
}

/// In-memory files keyed by path.
#[derive(Debug, Default)]
pub struct MemorySource {
    files: RwLock<HashMap<PathBuf, Vec<u8>>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file.
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        self.files
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(path.into(), content.into());
    }

    /// Remove a file, returning whether it was present.
    pub fn remove(&self, path: &Path) -> bool {
        self.files
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(path)
            .is_some()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }
}

impl DataSource for MemorySource {
    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains_key(path)
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send + '_>> {
        let files = self
            .files
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let content = files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no in-memory file at {}", path.display()),
            )
        })?;
        Ok(Box::new(io::Cursor::new(content)))
    }
}

impl<S: DataSource + ?Sized> DataSource for std::sync::Arc<S> {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send + '_>> {
        (**self).open(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fs_source_reports_files_but_not_directories() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.csv");
        std::fs::write(&file, "x\n1\n").unwrap();

        assert!(FsSource.exists(&file));
        assert!(!FsSource.exists(temp.path()));
        assert!(!FsSource.exists(&temp.path().join("missing.csv")));
    }

    #[test]
    fn fs_source_reads_content() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.csv");
        std::fs::write(&file, "x\n1\n").unwrap();

        let mut content = String::new();
        FsSource
            .open(&file)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "x\n1\n");
    }

    #[test]
    fn memory_source_insert_and_remove() {
        let source = MemorySource::new().with_file("/p/data/a.csv", "x\n1\n");
        assert!(source.exists(Path::new("/p/data/a.csv")));
        assert!(!source.exists(Path::new("/p/data/b.csv")));

        assert!(source.remove(Path::new("/p/data/a.csv")));
        assert!(!source.exists(Path::new("/p/data/a.csv")));
        let err = source.open(Path::new("/p/data/a.csv")).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
