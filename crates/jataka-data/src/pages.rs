//! Dashboard pages and the datasets each one reads
//!
//! A page load never fails because of one dataset: recoverable failures
//! become [`Section::Placeholder`] entries that the UI renders as
//! "data unavailable" or "data corrupt" notices.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::dataset::DatasetName;
use crate::error::{Error, Result};
use crate::loader::{LoadedTable, Loader};
use crate::mode::DataMode;
use crate::source::DataSource;
use crate::survey::Outcome;

/// A dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Overview,
    EmotionAnalysis,
    StoryGroups,
    StoryExplorer,
    TextInsights,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Overview,
        Page::EmotionAnalysis,
        Page::StoryGroups,
        Page::StoryExplorer,
        Page::TextInsights,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::EmotionAnalysis => "emotion_analysis",
            Page::StoryGroups => "story_groups",
            Page::StoryExplorer => "story_explorer",
            Page::TextInsights => "text_insights",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::EmotionAnalysis => "Emotion Analysis",
            Page::StoryGroups => "Story Groups",
            Page::StoryExplorer => "Story Explorer",
            Page::TextInsights => "Text Insights",
        }
    }

    /// Datasets rendered by this page, in render order.
    pub fn datasets(&self) -> &'static [DatasetName] {
        use DatasetName::*;
        match self {
            Page::Overview => &[OverallEmotions, EmotionScores, JatakaStories, TextStatistics],
            Page::EmotionAnalysis => &[
                JatakaStories,
                EmotionScores,
                ClusterAssignments,
                ClusterEmotions,
            ],
            Page::StoryGroups => &[ClusterAssignments, ClusterEmotions, ClusterVisualization],
            Page::StoryExplorer => &[
                JatakaStories,
                EmotionScores,
                ClusterAssignments,
                EmotionWordsFound,
                ChapterSimilarity,
            ],
            Page::TextInsights => &[
                TextStatistics,
                PosDistribution,
                NerEntities,
                NerCounts,
                WordFrequencies,
                WordFreqByCluster,
                WordFreqByEmotion,
                ClusterAssignments,
            ],
        }
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Page::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<_> = Page::ALL.iter().map(Page::as_str).collect();
                format!("unknown page {s:?} (expected one of: {})", known.join(", "))
            })
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dataset slot on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Section {
    Ready(LoadedTable),
    Placeholder {
        dataset: DatasetName,
        /// Operator-facing explanation, including tried paths or problems.
        message: String,
        outcome: Outcome,
    },
}

impl Section {
    pub fn dataset(&self) -> DatasetName {
        match self {
            Section::Ready(loaded) => loaded.dataset,
            Section::Placeholder { dataset, .. } => *dataset,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Section::Ready(_))
    }
}

/// Everything a page needs to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageData {
    pub page: Page,
    pub sections: Vec<Section>,
}

impl PageData {
    pub fn section(&self, dataset: DatasetName) -> Option<&Section> {
        self.sections.iter().find(|s| s.dataset() == dataset)
    }

    pub fn table(&self, dataset: DatasetName) -> Option<&LoadedTable> {
        match self.section(dataset)? {
            Section::Ready(loaded) => Some(loaded),
            Section::Placeholder { .. } => None,
        }
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| !s.is_ready())
    }
}

impl<S: DataSource> Loader<S> {
    /// Load every dataset a page reads.
    ///
    /// Recoverable failures become placeholders; configuration and registry
    /// errors still propagate.
    pub fn load_page(&self, page: Page, mode_override: Option<DataMode>) -> Result<PageData> {
        let sections = page
            .datasets()
            .iter()
            .map(|&dataset| match self.load(dataset, mode_override) {
                Ok(loaded) => Ok(Section::Ready(loaded)),
                Err(err) if err.is_recoverable() => placeholder(dataset, err),
                Err(err) => Err(err),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(PageData { page, sections })
    }
}

fn placeholder(dataset: DatasetName, err: Error) -> Result<Section> {
    let message = match &err {
        Error::NotFound { .. } => format!("Data unavailable. {err}"),
        Error::MalformedContent { .. } => format!("Data is corrupt. {err}"),
        _ => format!("Data could not be read. {err}"),
    };
    tracing::debug!(%dataset, %message, "Rendering placeholder");
    let outcome = Outcome::from_result(Err(err))?;
    Ok(Section::Placeholder {
        dataset,
        message,
        outcome,
    })
}
