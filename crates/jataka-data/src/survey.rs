//! Whole-registry survey
//!
//! Loads every dataset independently and records one outcome per dataset.
//! A failing dataset never stops the rest of the survey.

use std::path::PathBuf;

use serde::Serialize;

use crate::dataset::DatasetName;
use crate::error::{Error, Result};
use crate::loader::{LoadResult, Loader};
use crate::mode::DataMode;
use crate::resolver::SourceKind;
use crate::source::DataSource;
use crate::table::ContentProblem;

/// What happened when one dataset was loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Loaded {
        source: SourceKind,
        path: PathBuf,
        rows: usize,
    },
    Missing {
        attempted: Vec<PathBuf>,
    },
    Malformed {
        source: SourceKind,
        path: PathBuf,
        problems: Vec<ContentProblem>,
    },
    Unreadable {
        path: PathBuf,
        message: String,
    },
}

impl Outcome {
    /// Classify a load result.
    ///
    /// Hard errors are handed back unchanged; they are not dataset outcomes.
    pub fn from_result(result: LoadResult) -> Result<Self> {
        match result {
            Ok(loaded) => Ok(Outcome::Loaded {
                source: loaded.source,
                path: loaded.path,
                rows: loaded.table.len(),
            }),
            Err(Error::NotFound { attempted, .. }) => Ok(Outcome::Missing { attempted }),
            Err(Error::MalformedContent {
                path,
                source_kind,
                problems,
                ..
            }) => Ok(Outcome::Malformed {
                source: source_kind,
                path,
                problems,
            }),
            Err(Error::Unreadable { path, source, .. }) => Ok(Outcome::Unreadable {
                path,
                message: source.to_string(),
            }),
            Err(other) => Err(other),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Outcome::Loaded { .. })
    }
}

/// One dataset's row in a survey.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyEntry {
    pub dataset: DatasetName,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Survey of the whole registry under one effective mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Survey {
    pub mode: DataMode,
    pub entries: Vec<SurveyEntry>,
}

impl Survey {
    pub fn loaded(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_loaded()).count()
    }

    pub fn from_mockup(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| {
                matches!(
                    e.outcome,
                    Outcome::Loaded {
                        source: SourceKind::Mockup,
                        ..
                    }
                )
            })
            .count()
    }

    pub fn get(&self, dataset: DatasetName) -> Option<&Outcome> {
        self.entries
            .iter()
            .find(|e| e.dataset == dataset)
            .map(|e| &e.outcome)
    }
}

impl<S: DataSource> Loader<S> {
    /// Load every registry dataset once.
    pub fn survey(&self, mode_override: Option<DataMode>) -> Result<Survey> {
        let entries = DatasetName::ALL
            .into_iter()
            .map(|dataset| {
                Outcome::from_result(self.load(dataset, mode_override))
                    .map(|outcome| SurveyEntry { dataset, outcome })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Survey {
            mode: mode_override.unwrap_or(self.config().mode()),
            entries,
        })
    }
}
