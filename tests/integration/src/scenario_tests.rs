//! End-to-end scenarios for the dashboard data layer
//!
//! Each test builds a project directory on disk, resolves configuration the
//! way the dashboard does at startup, and checks what the pages would see.

use std::sync::Arc;

use jataka_data::{
    ConfigResolver, ContentProblem, DataMode, DatasetName, DatasetStats, EnvSnapshot, Error,
    Loader, ModeOrigin, Page, Section, SettingKey, SourceKind,
};
use jataka_test_utils::TestDataDir;
use jataka_test_utils::csv::{csv_without_column, valid_csv};
use pretty_assertions::assert_eq;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Startup configuration with the given environment, as the dashboard does.
fn start(dir: &TestDataDir, env: &[(&str, &str)]) -> Loader {
    let config = ConfigResolver::with_env(dir.root(), EnvSnapshot::from_pairs(env.iter().copied()))
        .resolve()
        .expect("configuration should resolve");
    Loader::new(Arc::new(config))
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn adaptive_fresh_checkout_runs_on_mockup_data() {
    let dir = TestDataDir::new();
    dir.write_valid_mockup(DatasetName::OverallEmotions);

    let loader = start(&dir, &[]);
    assert_eq!(loader.config().mode(), DataMode::Adaptive);

    let loaded = loader.load(DatasetName::OverallEmotions, None).unwrap();
    assert_eq!(loaded.source, SourceKind::Mockup);
    assert_eq!(
        loaded.path,
        dir.root().join("data").join("mockup").join("overall_emotions.csv")
    );
    assert!(loaded.is_mockup());
}

#[test]
fn real_mode_reports_corrupt_stories_without_substitution() {
    let dir = TestDataDir::new();
    dir.write_real(
        DatasetName::JatakaStories,
        csv_without_column(DatasetName::JatakaStories, "text"),
    );
    dir.write_valid_mockup(DatasetName::JatakaStories);

    let loader = start(&dir, &[("DATA_MODE", "real")]);
    let err = loader.load(DatasetName::JatakaStories, None).unwrap_err();

    match err {
        Error::MalformedContent {
            source_kind,
            problems,
            ..
        } => {
            assert_eq!(source_kind, SourceKind::Real);
            assert_eq!(
                problems,
                vec![ContentProblem::MissingColumns {
                    columns: vec!["text".to_string()]
                }]
            );
        }
        other => panic!("expected MalformedContent, got {other:?}"),
    }
}

#[test]
fn legacy_flag_behaves_like_mockup_mode() {
    let dir = TestDataDir::new();
    dir.write_valid_real(DatasetName::EmotionScores);
    dir.write_mockup(DatasetName::EmotionScores, valid_csv(DatasetName::EmotionScores));

    let legacy = start(&dir, &[("USE_MOCKUP", "true")]);
    let explicit = start(&dir, &[("DATA_MODE", "mockup")]);

    assert_eq!(legacy.config().mode(), DataMode::Mockup);
    assert_eq!(legacy.config().mode_origin(), ModeOrigin::LegacyFlag(SettingKey::UseMockupVar));

    let via_flag = legacy.load(DatasetName::EmotionScores, None).unwrap();
    let via_mode = explicit.load(DatasetName::EmotionScores, None).unwrap();
    assert_eq!(via_flag.source, SourceKind::Mockup);
    assert_eq!(via_flag.path, via_mode.path);
    assert_eq!(via_flag.table, via_mode.table);
}

#[test]
fn primary_mode_wins_over_legacy_flag() {
    let dir = TestDataDir::new();
    dir.write_valid_real(DatasetName::NerCounts);

    let loader = start(&dir, &[("DATA_MODE", "real"), ("USE_MOCKUP", "true")]);
    let loaded = loader.load(DatasetName::NerCounts, None).unwrap();
    assert_eq!(loaded.source, SourceKind::Real);
}

#[test]
fn invalid_mode_stops_startup() {
    let dir = TestDataDir::new();
    let result =
        ConfigResolver::with_env(dir.root(), EnvSnapshot::from_pairs([("DATA_MODE", "prod")]))
            .resolve();
    assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
}

#[test]
fn settings_file_mode_applies_when_env_is_silent() {
    let dir = TestDataDir::new();
    dir.write_settings("[data]\nmode = \"mockup\"\n");
    dir.write_valid_real(DatasetName::WordFrequencies);

    let loader = start(&dir, &[]);
    let err = loader.load(DatasetName::WordFrequencies, None).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn partial_real_data_mixes_sources_in_adaptive_mode() {
    let dir = TestDataDir::new();
    dir.populate_mockup();
    dir.write_valid_real(DatasetName::ClusterAssignments);

    let survey = start(&dir, &[]).survey(None).unwrap();
    assert_eq!(survey.loaded(), DatasetName::ALL.len());
    assert_eq!(survey.from_mockup(), DatasetName::ALL.len() - 1);
}

#[test]
fn page_renders_what_it_can() {
    let dir = TestDataDir::new();
    dir.write_valid_real(DatasetName::TextStatistics);
    dir.write_valid_real(DatasetName::WordFrequencies);
    dir.write_real(DatasetName::NerCounts, "entity_type\nPERSON\n");

    let data = start(&dir, &[]).load_page(Page::TextInsights, None).unwrap();

    assert_eq!(data.sections.len(), Page::TextInsights.datasets().len());
    assert!(data.table(DatasetName::TextStatistics).is_some());
    assert!(data.table(DatasetName::WordFrequencies).is_some());
    match data.section(DatasetName::NerCounts) {
        Some(Section::Placeholder { message, .. }) => {
            assert!(message.contains("count"), "got: {message}");
        }
        other => panic!("expected placeholder, got {other:?}"),
    }
}

#[test]
fn overview_stats_fall_back_then_recover() {
    let dir = TestDataDir::new();
    let loader = start(&dir, &[]);
    assert_eq!(DatasetStats::collect(&loader, None).unwrap(), DatasetStats::fallback());

    dir.write_valid_real(DatasetName::JatakaStories);
    dir.write_valid_real(DatasetName::TextStatistics);

    let stats = DatasetStats::collect(&loader, None).unwrap();
    assert!(!stats.is_fallback);
    assert_eq!(stats.total_chapters, 2);
    // sample rows carry 1 and 2 words
    assert_eq!(stats.total_words, 3);
}

#[test]
fn loads_reflect_file_changes_between_calls() {
    let dir = TestDataDir::new();
    let loader = start(&dir, &[]);

    assert!(loader.load(DatasetName::ChapterSimilarity, None).is_err());
    dir.write_valid_mockup(DatasetName::ChapterSimilarity);
    assert!(loader.load(DatasetName::ChapterSimilarity, None).unwrap().is_mockup());
    dir.write_valid_real(DatasetName::ChapterSimilarity);
    assert_eq!(
        loader.load(DatasetName::ChapterSimilarity, None).unwrap().source,
        SourceKind::Real
    );
}
