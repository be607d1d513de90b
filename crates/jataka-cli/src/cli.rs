//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jataka_data::{DataMode, DatasetName, Page, ScalingMethod};

/// Jataka dashboard data tool - inspect how datasets resolve and load
#[derive(Parser, Debug)]
#[command(name = "jataka")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project directory containing data/ and data/mockup/
    #[arg(long, global = true, env = "JATAKA_BASE_DIR", default_value = ".")]
    pub base_dir: PathBuf,

    /// Force a data mode for this invocation (real, mockup, adaptive)
    #[arg(long, global = true)]
    pub mode: Option<DataMode>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Show the effective data mode and where it came from
    Mode,

    /// List the candidate files for a dataset, in lookup order
    Resolve {
        /// Dataset name, e.g. emotion_scores
        dataset: DatasetName,
    },

    /// Load a dataset and print its first rows
    Load {
        /// Dataset name, e.g. emotion_scores
        dataset: DatasetName,

        /// Number of rows to show
        #[arg(long, default_value_t = 5)]
        head: usize,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Load every dataset and report the outcome of each
    Status {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show what a dashboard page would render
    Page {
        /// Page name, e.g. story-groups
        page: Page,
    },

    /// Show headline corpus statistics
    Stats {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show one chapter's emotion scores, scaled for display
    Scores {
        /// Chapter number
        chapter: i64,

        /// Scaling method (minmax, baseline, raw)
        #[arg(long, default_value = "minmax")]
        scaling: ScalingMethod,
    },

    /// List the dataset registry and required columns
    Datasets,
}
