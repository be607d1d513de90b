//! Scores command implementation

use colored::Colorize;
use jataka_data::{DatasetName, EMOTIONS, ScalingMethod, format_score, scale_emotion_scores};

use super::source_label;
use crate::context::Context;
use crate::error::{CliError, Result};

/// Run the scores command
pub fn run_scores(ctx: &Context, chapter: i64, scaling: ScalingMethod) -> Result<()> {
    let loaded = ctx
        .loader
        .load(DatasetName::EmotionScores, ctx.mode_override)?;
    let table = &loaded.table;

    let chapters = table.i64_column("chapter").unwrap_or_default();
    let row = chapters
        .iter()
        .position(|&c| c == chapter)
        .ok_or_else(|| CliError::user(format!("Chapter {chapter} not found in emotion_scores")))?;

    // Emotion columns are required and validated as numbers
    let raw: Vec<(&str, f64)> = EMOTIONS
        .iter()
        .map(|&emotion| {
            let value = table
                .cell(row, emotion)
                .and_then(|v| v.parse::<f64>().ok())
                .unwrap_or_default();
            (emotion, value)
        })
        .collect();

    println!(
        "{} {} [{}]",
        "Chapter".bold(),
        chapter,
        source_label(loaded.source)
    );
    println!("{}", scaling.description().dimmed());
    println!();
    for score in scale_emotion_scores(&raw, scaling) {
        println!("  {}", format_score(&score.emotion, score.scaled, score.raw, scaling));
    }

    Ok(())
}
