//! Stats command implementation

use colored::Colorize;
use jataka_data::DatasetStats;

use crate::context::Context;
use crate::error::Result;

/// Run the stats command
pub fn run_stats(ctx: &Context, json: bool) -> Result<()> {
    let stats = DatasetStats::collect(&ctx.loader, ctx.mode_override)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Corpus Statistics".bold());
    println!();
    println!("{}:        {}", "Stories".dimmed(), stats.total_stories);
    println!("{}:       {}", "Chapters".dimmed(), stats.total_chapters);
    println!("{}:          {}", "Words".dimmed(), stats.total_words);
    println!("{}: {}", "Words/chapter".dimmed(), stats.avg_words_per_chapter);
    println!("{}:       {}", "Language".dimmed(), stats.language);
    if stats.is_fallback {
        println!();
        println!("{}", "Source data unavailable; showing default figures".yellow());
    }

    Ok(())
}
