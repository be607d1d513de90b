//! Path resolution
//!
//! Turns a dataset and an effective mode into an ordered list of candidate
//! files. The fallback policy lives here as data: the loader only walks the
//! list in order.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::dataset::DatasetName;
use crate::mode::DataMode;

/// Real data root, relative to the project base directory.
pub const REAL_ROOT: &str = "data";

/// Mockup data root, relative to the project base directory.
pub const MOCKUP_ROOT: &str = "data/mockup";

/// Which data root a candidate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Real,
    Mockup,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Real => write!(f, "real"),
            SourceKind::Mockup => write!(f, "mockup"),
        }
    }
}

/// The two data roots of a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    real_root: PathBuf,
    mockup_root: PathBuf,
}

impl DataLayout {
    /// Standard layout under `base_dir`: `data/` and `data/mockup/`.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref();
        Self {
            real_root: base_dir.join(REAL_ROOT),
            mockup_root: base_dir.join(MOCKUP_ROOT),
        }
    }

    pub fn real_root(&self) -> &Path {
        &self.real_root
    }

    pub fn mockup_root(&self) -> &Path {
        &self.mockup_root
    }

    pub fn root(&self, source: SourceKind) -> &Path {
        match source {
            SourceKind::Real => &self.real_root,
            SourceKind::Mockup => &self.mockup_root,
        }
    }

    /// `<root>/<dataset>.csv`
    pub fn path_for(&self, dataset: DatasetName, source: SourceKind) -> PathBuf {
        self.root(source).join(dataset.file_name())
    }
}

/// One physical location to try.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub source: SourceKind,
    pub path: PathBuf,
}

/// Non-empty, ordered candidate list for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPath {
    dataset: DatasetName,
    mode: DataMode,
    candidates: Vec<Candidate>,
}

impl ResolvedPath {
    pub fn dataset(&self) -> DatasetName {
        self.dataset
    }

    pub fn mode(&self) -> DataMode {
        self.mode
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.candidates.iter().map(|c| c.path.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a ResolvedPath {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

/// Candidate sources for a mode, in the order they are tried.
pub fn source_order(mode: DataMode) -> &'static [SourceKind] {
    match mode {
        DataMode::Real => &[SourceKind::Real],
        DataMode::Mockup => &[SourceKind::Mockup],
        DataMode::Adaptive => &[SourceKind::Real, SourceKind::Mockup],
    }
}

/// Build the candidate list for `dataset` under `mode`.
pub fn resolve_paths(layout: &DataLayout, dataset: DatasetName, mode: DataMode) -> ResolvedPath {
    let candidates = source_order(mode)
        .iter()
        .map(|&source| Candidate {
            source,
            path: layout.path_for(dataset, source),
        })
        .collect();

    ResolvedPath {
        dataset,
        mode,
        candidates,
    }
}

/// A single load request: the dataset plus an optional per-call mode.
///
/// The override decides the mode for this request only; the process-wide
/// mode held by [`DataConfig`](crate::DataConfig) is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub dataset: DatasetName,
    pub mode_override: Option<DataMode>,
}

impl ResolutionRequest {
    pub fn new(dataset: DatasetName) -> Self {
        Self {
            dataset,
            mode_override: None,
        }
    }

    pub fn with_mode(dataset: DatasetName, mode: DataMode) -> Self {
        Self {
            dataset,
            mode_override: Some(mode),
        }
    }

    /// The override if present, else `process_mode`.
    pub fn effective_mode(&self, process_mode: DataMode) -> DataMode {
        self.mode_override.unwrap_or(process_mode)
    }
}

impl From<DatasetName> for ResolutionRequest {
    fn from(dataset: DatasetName) -> Self {
        Self::new(dataset)
    }
}
