//! Static dataset registry
//!
//! Every table the dashboard reads is a [`DatasetName`]. Each name maps to
//! exactly one file name (`<name>.csv`) and one [`DatasetSchema`] listing the
//! columns a file must carry before a load is considered successful.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// The eight basic emotions of the NRC lexicon, in column order.
pub const EMOTIONS: [&str; 8] = [
    "trust",
    "joy",
    "anger",
    "anticipation",
    "fear",
    "disgust",
    "surprise",
    "sadness",
];

/// Value type a required column must parse as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Text,
    Integer,
    /// Any number, integers included.
    Float,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Text => write!(f, "text"),
            ColumnKind::Integer => write!(f, "integer"),
            ColumnKind::Float => write!(f, "number"),
        }
    }
}

/// A required column and its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn text(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Text,
    }
}

const fn int(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Integer,
    }
}

const fn float(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Float,
    }
}

const EMOTION_COLUMNS: [ColumnSpec; 8] = [
    float("trust"),
    float("joy"),
    float("anger"),
    float("anticipation"),
    float("fear"),
    float("disgust"),
    float("surprise"),
    float("sadness"),
];

const fn with_emotions(key: ColumnSpec) -> [ColumnSpec; 9] {
    let mut columns = [key; 9];
    let mut i = 0;
    while i < EMOTION_COLUMNS.len() {
        columns[i + 1] = EMOTION_COLUMNS[i];
        i += 1;
    }
    columns
}

const CHAPTER_EMOTIONS: &[ColumnSpec] = &with_emotions(int("chapter"));
const CLUSTER_EMOTIONS: &[ColumnSpec] = &with_emotions(int("cluster"));
const OVERALL_EMOTIONS: &[ColumnSpec] = &EMOTION_COLUMNS;
const STORIES: &[ColumnSpec] = &[int("chapter"), text("title"), text("text")];
const CLUSTER_ASSIGNMENTS: &[ColumnSpec] = &[int("chapter"), int("cluster")];
const CLUSTER_VISUALIZATION: &[ColumnSpec] =
    &[int("chapter"), float("x"), float("y"), int("cluster")];
const TEXT_STATISTICS: &[ColumnSpec] =
    &[int("chapter"), int("total_words"), int("unique_words")];
const POS_DISTRIBUTION: &[ColumnSpec] = &[text("pos_tag"), int("count"), float("percentage")];
const POS_BY_CHAPTER: &[ColumnSpec] = &[
    int("chapter"),
    text("pos_tag"),
    int("count"),
    float("percentage"),
];
const POS_BY_CLUSTER: &[ColumnSpec] = &[
    int("cluster"),
    text("pos_tag"),
    int("count"),
    float("percentage"),
];
const NER_ENTITIES: &[ColumnSpec] = &[
    int("chapter"),
    text("entity"),
    text("entity_type"),
    int("count"),
];
const NER_BY_CHAPTER: &[ColumnSpec] = &[int("chapter"), text("entity_type"), int("count")];
const NER_COUNTS: &[ColumnSpec] = &[text("entity_type"), int("count"), float("percentage")];
const WORD_FREQUENCIES: &[ColumnSpec] = &[text("word"), int("frequency"), int("rank")];
const WORD_FREQ_BY_CLUSTER: &[ColumnSpec] = &[
    int("cluster"),
    text("word"),
    int("frequency"),
    int("rank"),
];
const WORD_FREQ_BY_EMOTION: &[ColumnSpec] = &[
    text("emotion"),
    text("word"),
    int("frequency"),
    int("rank"),
];
const EMOTION_WORDS_FOUND: &[ColumnSpec] = &[
    int("chapter"),
    text("emotion"),
    text("word"),
    int("count"),
];
const CHAPTER_SIMILARITY: &[ColumnSpec] = &[
    int("chapter"),
    int("similar_chapter"),
    float("similarity"),
];

/// Minimal required column set of a dataset.
///
/// Files may carry extra columns; those are kept as untyped text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSchema {
    pub required: &'static [ColumnSpec],
}

impl DatasetSchema {
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> {
        self.required.iter().map(|c| c.name)
    }
}

/// One logical, pre-computed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetName {
    JatakaStories,
    EmotionScores,
    ClusterAssignments,
    ClusterEmotions,
    OverallEmotions,
    ClusterVisualization,
    TextStatistics,
    PosDistribution,
    PosByChapter,
    PosByCluster,
    NerEntities,
    NerByChapter,
    NerCounts,
    WordFrequencies,
    WordFreqByCluster,
    WordFreqByEmotion,
    EmotionWordsFound,
    ChapterSimilarity,
}

impl DatasetName {
    /// The whole registry, in display order.
    pub const ALL: [DatasetName; 18] = [
        DatasetName::JatakaStories,
        DatasetName::EmotionScores,
        DatasetName::ClusterAssignments,
        DatasetName::ClusterEmotions,
        DatasetName::OverallEmotions,
        DatasetName::ClusterVisualization,
        DatasetName::TextStatistics,
        DatasetName::PosDistribution,
        DatasetName::PosByChapter,
        DatasetName::PosByCluster,
        DatasetName::NerEntities,
        DatasetName::NerByChapter,
        DatasetName::NerCounts,
        DatasetName::WordFrequencies,
        DatasetName::WordFreqByCluster,
        DatasetName::WordFreqByEmotion,
        DatasetName::EmotionWordsFound,
        DatasetName::ChapterSimilarity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetName::JatakaStories => "jataka_stories",
            DatasetName::EmotionScores => "emotion_scores",
            DatasetName::ClusterAssignments => "cluster_assignments",
            DatasetName::ClusterEmotions => "cluster_emotions",
            DatasetName::OverallEmotions => "overall_emotions",
            DatasetName::ClusterVisualization => "cluster_visualization",
            DatasetName::TextStatistics => "text_statistics",
            DatasetName::PosDistribution => "pos_distribution",
            DatasetName::PosByChapter => "pos_by_chapter",
            DatasetName::PosByCluster => "pos_by_cluster",
            DatasetName::NerEntities => "ner_entities",
            DatasetName::NerByChapter => "ner_by_chapter",
            DatasetName::NerCounts => "ner_counts",
            DatasetName::WordFrequencies => "word_frequencies",
            DatasetName::WordFreqByCluster => "word_freq_by_cluster",
            DatasetName::WordFreqByEmotion => "word_freq_by_emotion",
            DatasetName::EmotionWordsFound => "emotion_words_found",
            DatasetName::ChapterSimilarity => "chapter_similarity",
        }
    }

    /// File name under either data root.
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.as_str())
    }

    pub fn schema(&self) -> DatasetSchema {
        let required = match self {
            DatasetName::JatakaStories => STORIES,
            DatasetName::EmotionScores => CHAPTER_EMOTIONS,
            DatasetName::ClusterAssignments => CLUSTER_ASSIGNMENTS,
            DatasetName::ClusterEmotions => CLUSTER_EMOTIONS,
            DatasetName::OverallEmotions => OVERALL_EMOTIONS,
            DatasetName::ClusterVisualization => CLUSTER_VISUALIZATION,
            DatasetName::TextStatistics => TEXT_STATISTICS,
            DatasetName::PosDistribution => POS_DISTRIBUTION,
            DatasetName::PosByChapter => POS_BY_CHAPTER,
            DatasetName::PosByCluster => POS_BY_CLUSTER,
            DatasetName::NerEntities => NER_ENTITIES,
            DatasetName::NerByChapter => NER_BY_CHAPTER,
            DatasetName::NerCounts => NER_COUNTS,
            DatasetName::WordFrequencies => WORD_FREQUENCIES,
            DatasetName::WordFreqByCluster => WORD_FREQ_BY_CLUSTER,
            DatasetName::WordFreqByEmotion => WORD_FREQ_BY_EMOTION,
            DatasetName::EmotionWordsFound => EMOTION_WORDS_FOUND,
            DatasetName::ChapterSimilarity => CHAPTER_SIMILARITY,
        };
        DatasetSchema { required }
    }
}

impl FromStr for DatasetName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().trim_end_matches(".csv");
        DatasetName::ALL
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| Error::UnknownDataset {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
