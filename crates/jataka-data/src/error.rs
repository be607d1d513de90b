//! Error types for jataka-data

use std::path::PathBuf;

use crate::dataset::DatasetName;
use crate::resolver::SourceKind;
use crate::table::ContentProblem;

/// Result type for jataka-data operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or loading datasets.
///
/// Configuration and registry errors are hard failures. Content errors
/// (`NotFound`, `MalformedContent`, `Unreadable`) are scoped to a single
/// dataset; see [`Error::is_recoverable`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A mode setting holds a value outside `real | mockup | adaptive`
    #[error("Invalid configuration: {variable}={value:?} (expected one of: real, mockup, adaptive)")]
    InvalidConfiguration { variable: String, value: String },

    /// Dataset name outside the static registry
    #[error("Unknown dataset: {name}")]
    UnknownDataset { name: String },

    /// No candidate path exists
    #[error("Dataset {dataset} not found (tried: {})", join_paths(.attempted))]
    NotFound {
        dataset: DatasetName,
        attempted: Vec<PathBuf>,
    },

    /// A candidate exists but fails schema validation
    #[error("Dataset {dataset} is malformed at {path} ({source_kind}): {}", join_problems(.problems))]
    MalformedContent {
        dataset: DatasetName,
        path: PathBuf,
        source_kind: SourceKind,
        problems: Vec<ContentProblem>,
    },

    /// A candidate exists but could not be read
    #[error("Dataset {dataset} could not be read at {path}: {source}")]
    Unreadable {
        dataset: DatasetName,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings at {path}: {message}")]
    SettingsParse { path: PathBuf, message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether a page can render a placeholder for this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::MalformedContent { .. } | Self::Unreadable { .. }
        )
    }

    /// The dataset this error is scoped to, if any.
    pub fn dataset(&self) -> Option<DatasetName> {
        match self {
            Self::NotFound { dataset, .. }
            | Self::MalformedContent { dataset, .. }
            | Self::Unreadable { dataset, .. } => Some(*dataset),
            _ => None,
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_problems(problems: &[ContentProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_lists_every_attempted_path() {
        let error = Error::NotFound {
            dataset: DatasetName::OverallEmotions,
            attempted: vec![
                PathBuf::from("data/overall_emotions.csv"),
                PathBuf::from("data/mockup/overall_emotions.csv"),
            ],
        };

        let display = error.to_string();
        assert!(display.contains("overall_emotions"), "got: {display}");
        assert!(display.contains("data/overall_emotions.csv"), "got: {display}");
        assert!(
            display.contains("data/mockup/overall_emotions.csv"),
            "got: {display}"
        );
    }

    #[test]
    fn malformed_content_names_missing_column() {
        let error = Error::MalformedContent {
            dataset: DatasetName::JatakaStories,
            path: PathBuf::from("data/jataka_stories.csv"),
            source_kind: SourceKind::Real,
            problems: vec![ContentProblem::MissingColumns {
                columns: vec!["text".to_string()],
            }],
        };

        let display = error.to_string();
        assert!(display.contains("text"), "got: {display}");
        assert!(display.contains("real"), "got: {display}");
    }

    #[test]
    fn recoverability_follows_taxonomy() {
        let hard = Error::InvalidConfiguration {
            variable: "DATA_MODE".into(),
            value: "prod".into(),
        };
        assert!(!hard.is_recoverable());
        assert!(!Error::UnknownDataset { name: "x".into() }.is_recoverable());

        let soft = Error::NotFound {
            dataset: DatasetName::EmotionScores,
            attempted: vec![],
        };
        assert!(soft.is_recoverable());
        assert_eq!(soft.dataset(), Some(DatasetName::EmotionScores));
    }
}
