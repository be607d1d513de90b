//! Mode command implementation

use colored::Colorize;

use crate::context::Context;
use crate::error::Result;

/// Run the mode command
pub fn run_mode(ctx: &Context) -> Result<()> {
    let config = ctx.config();

    println!("{}", "Data Mode".bold());
    println!();
    println!("{}:     {}", "Mode".dimmed(), config.mode().as_str().cyan());
    println!("{}:   {}", "Origin".dimmed(), config.mode_origin());
    if let Some(forced) = ctx.mode_override {
        println!("{}: {} (--mode)", "Override".dimmed(), forced.as_str().cyan());
    }
    println!("{}:     {}", "Base".dimmed(), config.base_dir().display());
    println!(
        "{}:     {}",
        "Real".dimmed(),
        config.layout().real_root().display()
    );
    println!(
        "{}:   {}",
        "Mockup".dimmed(),
        config.layout().mockup_root().display()
    );

    Ok(())
}
