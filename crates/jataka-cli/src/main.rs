//! Jataka dashboard data CLI
//!
//! Inspects how the dashboard's datasets resolve and load under each data
//! mode, without starting the dashboard itself.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use context::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    } else {
        // Quiet unless RUST_LOG asks for more
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }

    let Some(command) = cli.command else {
        println!("{} Jataka dashboard data tool", "jataka".green().bold());
        println!();
        println!("Run {} for available commands.", "jataka --help".cyan());
        return Ok(());
    };

    let ctx = Context::load(&cli.base_dir, cli.mode)?;
    execute_command(&ctx, command)
}

fn execute_command(ctx: &Context, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Mode => commands::run_mode(ctx),
        Commands::Resolve { dataset } => commands::run_resolve(ctx, dataset),
        Commands::Load {
            dataset,
            head,
            json,
        } => commands::run_load(ctx, dataset, head, json),
        Commands::Status { json } => commands::run_status(ctx, json),
        Commands::Page { page } => commands::run_page(ctx, page),
        Commands::Stats { json } => commands::run_stats(ctx, json),
        Commands::Scores { chapter, scaling } => commands::run_scores(ctx, chapter, scaling),
        Commands::Datasets => commands::run_datasets(),
    }
}
