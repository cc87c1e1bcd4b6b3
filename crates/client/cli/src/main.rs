//! Command-line harness for the robot decision core.
//!
//! Reads a JSON board snapshot, runs the decision core and prints the result
//! as JSON on stdout. Logs never go to stdout.
mod commands;
mod logging;
mod snapshot;

use anyhow::Result;
use clap::Parser;
use commands::{Decide, Inspect};

/// Decision core harness
#[derive(Parser)]
#[command(name = "robot-cli")]
#[command(about = "Evaluate robot decisions on a board snapshot", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Decide actions for our team (or a single unit)
    Decide(Decide),

    /// Show the classification and neighbourhood counts of one tile
    Inspect(Inspect),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let _guard = logging::setup_logging()?;

    let cli = Cli::parse();

    match cli.command {
        Command::Decide(cmd) => cmd.execute(),
        Command::Inspect(cmd) => cmd.execute(),
    }
}
