//! Overview metrics derived from the stories and text statistics datasets

use std::collections::HashSet;

use serde::Serialize;

use crate::dataset::DatasetName;
use crate::error::Result;
use crate::loader::Loader;
use crate::mode::DataMode;
use crate::source::DataSource;

/// Shown when the source datasets cannot be loaded.
pub const FALLBACK_TOTAL_STORIES: usize = 300;
pub const FALLBACK_TOTAL_CHAPTERS: usize = 313;

pub const CORPUS_LANGUAGE: &str = "Thai";

/// Headline numbers for the overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub total_stories: usize,
    pub total_chapters: usize,
    pub total_words: i64,
    pub avg_words_per_chapter: i64,
    pub language: &'static str,
    /// True when the numbers are the built-in defaults.
    pub is_fallback: bool,
}

impl DatasetStats {
    pub fn fallback() -> Self {
        Self {
            total_stories: FALLBACK_TOTAL_STORIES,
            total_chapters: FALLBACK_TOTAL_CHAPTERS,
            total_words: 0,
            avg_words_per_chapter: 0,
            language: CORPUS_LANGUAGE,
            is_fallback: true,
        }
    }

    /// Compute the metrics, or fall back to defaults when either source
    /// dataset is missing or corrupt. Hard errors still propagate.
    pub fn collect<S: DataSource>(
        loader: &Loader<S>,
        mode_override: Option<DataMode>,
    ) -> Result<Self> {
        let stories = match loader.load(DatasetName::JatakaStories, mode_override) {
            Ok(loaded) => loaded.table,
            Err(err) if err.is_recoverable() => {
                tracing::debug!(%err, "Stories unavailable, using default stats");
                return Ok(Self::fallback());
            }
            Err(err) => return Err(err),
        };
        let text_stats = match loader.load(DatasetName::TextStatistics, mode_override) {
            Ok(loaded) => loaded.table,
            Err(err) if err.is_recoverable() => {
                tracing::debug!(%err, "Text statistics unavailable, using default stats");
                return Ok(Self::fallback());
            }
            Err(err) => return Err(err),
        };

        let total_chapters = stories.len();
        let total_stories = stories
            .text_column("story_id")
            .map(|ids| {
                ids.into_iter()
                    .filter(|id| !id.is_empty())
                    .collect::<HashSet<_>>()
                    .len()
            })
            .unwrap_or(total_chapters);

        // total_words is a validated integer column
        let words = text_stats.i64_column("total_words").unwrap_or_default();
        let Some(total_words) = words.iter().try_fold(0i64, |acc, &w| acc.checked_add(w)) else {
            tracing::warn!("Word totals overflow, using default stats");
            return Ok(Self::fallback());
        };
        let avg_words_per_chapter = if words.is_empty() {
            0
        } else {
            total_words / words.len() as i64
        };

        Ok(Self {
            total_stories,
            total_chapters,
            total_words,
            avg_words_per_chapter,
            language: CORPUS_LANGUAGE,
            is_fallback: false,
        })
    }
}
