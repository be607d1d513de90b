//! Page command implementation

use colored::Colorize;
use jataka_data::{Page, Section};

use super::source_label;
use crate::context::Context;
use crate::error::Result;

/// Run the page command
pub fn run_page(ctx: &Context, page: Page) -> Result<()> {
    let data = ctx.loader.load_page(page, ctx.mode_override)?;

    println!("{} ({} mode)", page.title().bold(), ctx.effective_mode().as_str().cyan());
    println!();

    for section in &data.sections {
        match section {
            Section::Ready(loaded) => println!(
                "  {} {} ({} rows, {})",
                "+".green(),
                loaded.dataset.as_str().cyan(),
                loaded.table.len(),
                source_label(loaded.source)
            ),
            Section::Placeholder {
                dataset, message, ..
            } => {
                println!("  {} {}", "-".red(), dataset.as_str());
                println!("      {}", message.dimmed());
            }
        }
    }

    let missing = data.placeholders().count();
    if missing > 0 {
        println!();
        println!(
            "{} section(s) will render a placeholder",
            missing.to_string().yellow()
        );
    }

    Ok(())
}
