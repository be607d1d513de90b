//! Status command implementation

use colored::Colorize;
use jataka_data::Outcome;

use super::source_label;
use crate::context::Context;
use crate::error::Result;

/// Run the status command
pub fn run_status(ctx: &Context, json: bool) -> Result<()> {
    let survey = ctx.loader.survey(ctx.mode_override)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&survey)?);
        return Ok(());
    }

    println!("{}", "Dataset Status".bold());
    println!();
    println!("{}:   {}", "Mode".dimmed(), survey.mode.as_str().cyan());
    println!(
        "{}:   {}",
        "Base".dimmed(),
        ctx.config().base_dir().display()
    );
    println!();

    for entry in &survey.entries {
        let name = entry.dataset.as_str();
        match &entry.outcome {
            Outcome::Loaded { source, rows, .. } => {
                println!(
                    "  {} {} ({} rows, {})",
                    "+".green(),
                    name.cyan(),
                    rows,
                    source_label(*source)
                );
            }
            Outcome::Missing { attempted } => {
                println!("  {} {} ({})", "-".red(), name, "missing".red());
                for path in attempted {
                    println!("      {}", path.display().to_string().dimmed());
                }
            }
            Outcome::Malformed { path, problems, .. } => {
                println!("  {} {} ({})", "!".yellow(), name, "malformed".yellow());
                println!("      {}", path.display().to_string().dimmed());
                for problem in problems {
                    println!("      {problem}");
                }
            }
            Outcome::Unreadable { path, message } => {
                println!("  {} {} ({})", "!".red(), name, "unreadable".red());
                println!("      {}: {message}", path.display());
            }
        }
    }

    println!();
    println!(
        "{} of {} datasets loaded, {} from mockup",
        survey.loaded(),
        survey.entries.len(),
        survey.from_mockup()
    );

    Ok(())
}
