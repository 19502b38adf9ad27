//! Tic-Tac-Toe search CLI
//!
//! This CLI provides:
//! - Solving a position with minimax or alpha-beta
//! - Comparing both engines on one position
//! - Verifying both engines agree on every reachable position

use anyhow::Result;
use clap::{Parser, Subcommand};

use tictactoe_search::cli::{self, commands};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Exhaustive game-tree search for Tic-Tac-Toe", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the value of a position and a move achieving it
    Solve(commands::solve::SolveArgs),

    /// Run both engines on one position
    Compare(commands::compare::CompareArgs),

    /// Cross-check both engines on every reachable position
    Verify(commands::verify::VerifyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    match cli.command {
        Commands::Solve(args) => commands::solve::execute(args),
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Verify(args) => commands::verify::execute(args),
    }
}
