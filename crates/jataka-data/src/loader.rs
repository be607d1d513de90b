//! Dataset loading
//!
//! A load walks the candidate list from [`resolve_paths`] strictly in order.
//! The first candidate that exists is read and validated, and its outcome is
//! final: a malformed or unreadable file never falls through to the next
//! candidate. Only absence advances the walk.
//!
//! ```text
//! Start -> TryCandidate(i) -> exists & valid   -> Ok(LoadedTable)
//!                          -> exists & invalid -> Err(MalformedContent)
//!                          -> absent           -> TryCandidate(i + 1)
//!                                                 | Err(NotFound) when exhausted
//! ```

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

use crate::config::DataConfig;
use crate::dataset::DatasetName;
use crate::error::{Error, Result};
use crate::mode::DataMode;
use crate::resolver::{Candidate, ResolutionRequest, ResolvedPath, SourceKind, resolve_paths};
use crate::source::{DataSource, FsSource};
use crate::table::{ContentProblem, Table};

/// A successfully loaded dataset, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedTable {
    pub dataset: DatasetName,
    /// Effective mode of the request.
    pub mode: DataMode,
    /// Which root satisfied the request.
    pub source: SourceKind,
    pub path: PathBuf,
    pub table: Table,
}

impl LoadedTable {
    pub fn is_mockup(&self) -> bool {
        self.source == SourceKind::Mockup
    }
}

/// Outcome of a single load request.
pub type LoadResult = Result<LoadedTable>;

/// Resolves and loads datasets against a fixed [`DataConfig`].
///
/// Holds no mutable state; share it freely between threads.
#[derive(Debug, Clone)]
pub struct Loader<S = FsSource> {
    config: Arc<DataConfig>,
    source: S,
}

impl Loader<FsSource> {
    /// Loader over the local filesystem.
    pub fn new(config: Arc<DataConfig>) -> Self {
        Self::with_source(config, FsSource)
    }
}

impl<S: DataSource> Loader<S> {
    pub fn with_source(config: Arc<DataConfig>, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &DataConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Candidate list for a request, without touching any file.
    pub fn resolve(&self, request: impl Into<ResolutionRequest>) -> ResolvedPath {
        let request = request.into();
        let mode = request.effective_mode(self.config.mode());
        resolve_paths(self.config.layout(), request.dataset, mode)
    }

    /// Load `dataset`, optionally forcing a mode for this call only.
    pub fn load(&self, dataset: DatasetName, mode_override: Option<DataMode>) -> LoadResult {
        self.load_request(&ResolutionRequest {
            dataset,
            mode_override,
        })
    }

    /// Load by registry name; an unknown name is an [`Error::UnknownDataset`].
    pub fn load_named(&self, name: &str, mode_override: Option<DataMode>) -> LoadResult {
        let dataset = name.parse::<DatasetName>()?;
        self.load(dataset, mode_override)
    }

    pub fn load_request(&self, request: &ResolutionRequest) -> LoadResult {
        let resolved = self.resolve(*request);
        let dataset = resolved.dataset();

        for (position, candidate) in resolved.candidates().iter().enumerate() {
            if !self.source.exists(&candidate.path) {
                tracing::debug!(
                    %dataset,
                    source = %candidate.source,
                    path = ?candidate.path,
                    "Candidate absent"
                );
                continue;
            }

            if position > 0 {
                tracing::warn!(
                    %dataset,
                    source = %candidate.source,
                    path = ?candidate.path,
                    "Preferred candidate absent, falling back"
                );
            }

            return self.read_candidate(dataset, resolved.mode(), candidate);
        }

        tracing::debug!(%dataset, mode = %resolved.mode(), "No candidate exists");
        Err(Error::NotFound {
            dataset,
            attempted: resolved.paths(),
        })
    }

    fn read_candidate(
        &self,
        dataset: DatasetName,
        mode: DataMode,
        candidate: &Candidate,
    ) -> LoadResult {
        let limit = self.config.max_file_bytes();
        let unreadable = |source: std::io::Error| Error::Unreadable {
            dataset,
            path: candidate.path.clone(),
            source,
        };
        let malformed = |problems: Vec<ContentProblem>| {
            tracing::warn!(
                %dataset,
                source = %candidate.source,
                path = ?candidate.path,
                problems = problems.len(),
                "Dataset failed validation"
            );
            Error::MalformedContent {
                dataset,
                path: candidate.path.clone(),
                source_kind: candidate.source,
                problems,
            }
        };

        let mut bytes = Vec::new();
        self.source
            .open(&candidate.path)
            .map_err(unreadable)?
            .take(limit.saturating_add(1))
            .read_to_end(&mut bytes)
            .map_err(unreadable)?;

        if bytes.len() as u64 > limit {
            return Err(malformed(vec![ContentProblem::TooLarge { limit }]));
        }

        let table = Table::from_reader(bytes.as_slice(), dataset.schema()).map_err(malformed)?;

        tracing::info!(
            %dataset,
            source = %candidate.source,
            path = ?candidate.path,
            rows = table.len(),
            "Loaded dataset"
        );

        Ok(LoadedTable {
            dataset,
            mode,
            source: candidate.source,
            path: candidate.path.clone(),
            table,
        })
    }
}
