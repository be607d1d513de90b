//! Datasets command implementation

use colored::Colorize;
use jataka_data::DatasetName;

use crate::error::Result;

/// Run the datasets command
pub fn run_datasets() -> Result<()> {
    println!("{}", "Datasets".bold());
    println!();
    for dataset in DatasetName::ALL {
        let columns: Vec<_> = dataset
            .schema()
            .required
            .iter()
            .map(|c| format!("{}:{}", c.name, c.kind))
            .collect();
        println!("  {} {}", dataset.file_name().cyan(), columns.join(", ").dimmed());
    }
    Ok(())
}
