//! Resolve command implementation

use colored::Colorize;
use jataka_data::{DataSource, DatasetName, ResolutionRequest};

use super::source_label;
use crate::context::Context;
use crate::error::Result;

/// Run the resolve command
pub fn run_resolve(ctx: &Context, dataset: DatasetName) -> Result<()> {
    let request = ResolutionRequest {
        dataset,
        mode_override: ctx.mode_override,
    };
    let resolved = ctx.loader.resolve(request);

    println!(
        "{} ({} mode)",
        dataset.as_str().bold(),
        resolved.mode().as_str().cyan()
    );
    for (i, candidate) in resolved.candidates().iter().enumerate() {
        let marker = if ctx.loader.source().exists(&candidate.path) {
            "+".green()
        } else {
            "-".red()
        };
        println!(
            "  {}. {} {} [{}]",
            i + 1,
            marker,
            candidate.path.display(),
            source_label(candidate.source)
        );
    }

    Ok(())
}
