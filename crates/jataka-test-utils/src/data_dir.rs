//! [`TestDataDir`] builder for dashboard data layer scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use jataka_data::{DataConfig, DataMode, DatasetName, Loader, SourceKind};
use tempfile::TempDir;

use crate::csv::valid_csv;

/// A temporary project directory with `data/` and `data/mockup/` roots.
///
/// # Example
///
/// ```rust,no_run
/// use jataka_data::{DataMode, DatasetName};
/// use jataka_test_utils::TestDataDir;
///
/// let dir = TestDataDir::new();
/// dir.write_valid_mockup(DatasetName::OverallEmotions);
/// let loaded = dir.loader(DataMode::Adaptive)
///     .load(DatasetName::OverallEmotions, None)
///     .unwrap();
/// assert!(loaded.is_mockup());
/// ```
pub struct TestDataDir {
    temp_dir: TempDir,
}

impl Default for TestDataDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDataDir {
    /// Create an empty project directory; no data roots exist yet.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the project base directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path a dataset file would have under the given root.
    pub fn path_for(&self, dataset: DatasetName, source: SourceKind) -> PathBuf {
        let root = match source {
            SourceKind::Real => self.root().join("data"),
            SourceKind::Mockup => self.root().join("data").join("mockup"),
        };
        root.join(dataset.file_name())
    }

    /// Write raw bytes as a dataset file, creating the root if needed.
    pub fn write(&self, dataset: DatasetName, source: SourceKind, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path_for(dataset, source);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap_or_else(|e| {
            panic!("TestDataDir::write: failed to write {}: {e}", path.display())
        });
        path
    }

    pub fn write_real(&self, dataset: DatasetName, content: impl AsRef<[u8]>) -> PathBuf {
        self.write(dataset, SourceKind::Real, content)
    }

    pub fn write_mockup(&self, dataset: DatasetName, content: impl AsRef<[u8]>) -> PathBuf {
        self.write(dataset, SourceKind::Mockup, content)
    }

    pub fn write_valid_real(&self, dataset: DatasetName) -> PathBuf {
        self.write_real(dataset, valid_csv(dataset))
    }

    pub fn write_valid_mockup(&self, dataset: DatasetName) -> PathBuf {
        self.write_mockup(dataset, valid_csv(dataset))
    }

    /// Write a valid mockup file for every dataset in the registry.
    pub fn populate_mockup(&self) {
        for dataset in DatasetName::ALL {
            self.write_valid_mockup(dataset);
        }
    }

    /// Write `dashboard.toml` in the project root.
    pub fn write_settings(&self, content: &str) {
        fs::write(self.root().join("dashboard.toml"), content).unwrap();
    }

    /// Configuration rooted here with an explicit mode.
    pub fn config(&self, mode: DataMode) -> DataConfig {
        DataConfig::new(self.root(), mode)
    }

    /// Filesystem loader rooted here with an explicit mode.
    pub fn loader(&self, mode: DataMode) -> Loader {
        Loader::new(Arc::new(self.config(mode)))
    }
}
