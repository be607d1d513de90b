//! Load command implementation

use colored::Colorize;
use jataka_data::DatasetName;
use serde_json::json;

use super::source_label;
use crate::context::Context;
use crate::error::Result;

/// Run the load command
pub fn run_load(ctx: &Context, dataset: DatasetName, head: usize, json: bool) -> Result<()> {
    let loaded = ctx.loader.load(dataset, ctx.mode_override)?;
    let preview = loaded.table.head(head);

    if json {
        let output = json!({
            "dataset": loaded.dataset,
            "mode": loaded.mode,
            "source": loaded.source,
            "path": loaded.path,
            "rows": loaded.table.len(),
            "columns": preview.columns(),
            "head": preview.rows(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} from {} [{}]",
        dataset.as_str().bold(),
        loaded.path.display(),
        source_label(loaded.source)
    );
    if loaded.is_mockup() {
        println!("{}", "Showing demonstration data".yellow());
    }
    println!("{} rows", loaded.table.len());
    println!();
    println!("{}", preview.columns().join(" | ").bold());
    for row in preview.rows() {
        println!("{}", row.join(" | "));
    }

    Ok(())
}
