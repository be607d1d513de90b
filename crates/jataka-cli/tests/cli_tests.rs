//! CLI end-to-end tests that invoke the compiled `jataka` binary.

use assert_cmd::Command;
use jataka_data::DatasetName;
use jataka_test_utils::TestDataDir;
use jataka_test_utils::csv::csv_without_column;
use predicates::prelude::*;

/// `jataka` rooted at `dir` with a clean mode environment.
fn jataka(dir: &TestDataDir) -> Command {
    let mut cmd = Command::cargo_bin("jataka").unwrap();
    cmd.env_remove("DATA_MODE")
        .env_remove("RUST_LOG")
        .env_remove("USE_MOCKUP")
        .env_remove("JATAKA_BASE_DIR")
        .env("NO_COLOR", "1")
        .arg("--base-dir")
        .arg(dir.root());
    cmd
}

#[test]
fn test_help_exits_zero() {
    Command::cargo_bin("jataka")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"));
}

#[test]
fn test_mode_defaults_to_adaptive() {
    let dir = TestDataDir::new();
    jataka(&dir)
        .arg("mode")
        .assert()
        .success()
        .stdout(predicate::str::contains("adaptive"))
        .stdout(predicate::str::contains("default"));
}

#[test]
fn test_mode_reads_legacy_flag() {
    let dir = TestDataDir::new();
    jataka(&dir)
        .env("USE_MOCKUP", "true")
        .arg("mode")
        .assert()
        .success()
        .stdout(predicate::str::contains("mockup"))
        .stdout(predicate::str::contains("USE_MOCKUP"));
}

#[test]
fn test_invalid_mode_env_fails() {
    let dir = TestDataDir::new();
    jataka(&dir)
        .env("DATA_MODE", "production")
        .arg("mode")
        .assert()
        .failure()
        .stderr(predicate::str::contains("production"));
}

#[test]
fn test_resolve_lists_candidates_in_order() {
    let dir = TestDataDir::new();
    dir.write_valid_mockup(DatasetName::NerCounts);

    let output = jataka(&dir)
        .args(["resolve", "ner_counts"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let real = stdout.find("data/ner_counts.csv").expect("real candidate listed");
    let mockup = stdout
        .find("data/mockup/ner_counts.csv")
        .expect("mockup candidate listed");
    assert!(real < mockup, "real must come first:\n{stdout}");
}

#[test]
fn test_load_json_reports_mockup_fallback() {
    let dir = TestDataDir::new();
    dir.write_valid_mockup(DatasetName::OverallEmotions);

    let output = jataka(&dir)
        .args(["load", "overall_emotions", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["dataset"], "overall_emotions");
    assert_eq!(value["mode"], "adaptive");
    assert_eq!(value["source"], "mockup");
    assert_eq!(value["rows"], 2);
}

#[test]
fn test_rust_log_surfaces_fallback_warning() {
    let dir = TestDataDir::new();
    dir.write_valid_mockup(DatasetName::OverallEmotions);

    jataka(&dir)
        .env("RUST_LOG", "jataka_data=warn")
        .args(["load", "overall_emotions"])
        .assert()
        .success()
        .stderr(predicate::str::contains("falling back"))
        .stderr(predicate::str::contains("overall_emotions"));
}

#[test]
fn test_logs_are_quiet_without_rust_log() {
    let dir = TestDataDir::new();
    dir.write_valid_mockup(DatasetName::OverallEmotions);

    jataka(&dir)
        .args(["load", "overall_emotions"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_mode_names_settings_file_origin() {
    let dir = TestDataDir::new();
    dir.write_settings("[data]\nmode = \"real\"\n");

    jataka(&dir)
        .arg("mode")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard.toml [data].mode"));
}

#[test]
fn test_load_missing_dataset_fails_with_paths() {
    let dir = TestDataDir::new();
    jataka(&dir)
        .args(["load", "text_statistics", "--mode", "real"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("data/text_statistics.csv"));
}

#[test]
fn test_load_malformed_names_missing_column() {
    let dir = TestDataDir::new();
    dir.write_real(
        DatasetName::JatakaStories,
        csv_without_column(DatasetName::JatakaStories, "text"),
    );
    dir.write_valid_mockup(DatasetName::JatakaStories);

    jataka(&dir)
        .args(["load", "jataka_stories"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required columns: text"));
}

#[test]
fn test_load_unknown_dataset_is_rejected() {
    let dir = TestDataDir::new();
    jataka(&dir)
        .args(["load", "sentiment"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sentiment"));
}

#[test]
fn test_status_json_covers_registry() {
    let dir = TestDataDir::new();
    dir.populate_mockup();
    dir.write_valid_real(DatasetName::EmotionScores);

    let output = jataka(&dir).args(["status", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = value["entries"].as_array().unwrap();
    assert_eq!(entries.len(), DatasetName::ALL.len());
    assert!(entries.iter().all(|e| e["status"] == "loaded"));

    let scores = entries
        .iter()
        .find(|e| e["dataset"] == "emotion_scores")
        .unwrap();
    assert_eq!(scores["source"], "real");
}

#[test]
fn test_status_mode_override() {
    let dir = TestDataDir::new();
    dir.write_valid_real(DatasetName::EmotionScores);

    jataka(&dir)
        .args(["status", "--mode", "mockup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 of 18 datasets loaded"));
}

#[test]
fn test_page_renders_placeholders() {
    let dir = TestDataDir::new();
    dir.write_valid_real(DatasetName::ClusterAssignments);

    jataka(&dir)
        .args(["page", "story-groups"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Story Groups"))
        .stdout(predicate::str::contains("Data unavailable"))
        .stdout(predicate::str::contains("2 section(s)"));
}

#[test]
fn test_stats_falls_back_to_defaults() {
    let dir = TestDataDir::new();

    let output = jataka(&dir).args(["stats", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_stories"], 300);
    assert_eq!(value["total_chapters"], 313);
    assert_eq!(value["is_fallback"], true);
}

#[test]
fn test_scores_prints_scaled_values() {
    let dir = TestDataDir::new();
    dir.write_real(
        DatasetName::EmotionScores,
        "chapter,trust,joy,anger,anticipation,fear,disgust,surprise,sadness\n\
         7,0.1,0.2,0.1,0.1,0.1,0.1,0.1,0.2\n",
    );

    jataka(&dir)
        .args(["scores", "7", "--scaling", "minmax"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Joy: 1.000 (raw: 0.2000)"))
        .stdout(predicate::str::contains("Trust: 0.000 (raw: 0.1000)"));
}

#[test]
fn test_scores_unknown_chapter_fails() {
    let dir = TestDataDir::new();
    dir.write_valid_real(DatasetName::EmotionScores);

    jataka(&dir)
        .args(["scores", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Chapter 99 not found"));
}

#[test]
fn test_datasets_lists_registry() {
    let dir = TestDataDir::new();
    jataka(&dir)
        .arg("datasets")
        .assert()
        .success()
        .stdout(predicate::str::contains("emotion_scores.csv"))
        .stdout(predicate::str::contains("chapter_similarity.csv"));
}

#[test]
fn test_missing_base_dir_is_user_error() {
    Command::cargo_bin("jataka")
        .unwrap()
        .env_remove("JATAKA_BASE_DIR")
        .args(["--base-dir", "/definitely/not/here", "mode"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not accessible"));
}
