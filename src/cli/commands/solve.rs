//! Solve command - Find the game-theoretic value and a best move

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::{
    cli::{
        config::{PositionArgs, SearchArgs},
        output::{describe_score, format_board, format_number, print_section, print_stats_table},
    },
    search::{Score, SearchStats},
    tictactoe::LineAnalyzer,
};

#[derive(Parser, Debug)]
#[command(about = "Solve a position")]
pub struct SolveArgs {
    #[command(flatten)]
    pub position: PositionArgs,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Export the result as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SolveReport {
    board: String,
    to_play: char,
    maximizing: bool,
    engine: &'static str,
    tie_break: &'static str,
    score: Score,
    best_move: Option<usize>,
    result_board: String,
    stats: SearchStats,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let position = args.position.resolve()?;
    let config = args.search.resolve()?;
    let board = position.board;

    let mut engine = config.build_engine();
    info!(
        engine = engine.name(),
        board = %board.encode(),
        to_play = %position.to_play,
        maximizing = position.maximizing,
        "solving position"
    );
    let result = engine.search(&board, position.maximizing, position.to_play);
    let stats = engine.stats();
    let best_move = result.best_move(&board);

    print_section(&format!("Solve ({})", engine.name()));
    println!("{board}");
    println!();

    let immediate_wins = LineAnalyzer::winning_moves(&board.cells, position.to_play);
    print_stats_table(&[
        ("To play", position.to_play.to_string()),
        (
            "Perspective",
            if position.maximizing {
                "maximizing".to_string()
            } else {
                "minimizing".to_string()
            },
        ),
        ("Tie-break", config.tie_break.as_str().to_string()),
        (
            "Score",
            format!("{:+} ({})", result.score, describe_score(result.score)),
        ),
        (
            "Best move",
            best_move.map_or_else(|| "none (terminal)".to_string(), |m| m.to_string()),
        ),
        ("Result", format_board(&result.board)),
        (
            "Immediate wins",
            if immediate_wins.is_empty() {
                "none".to_string()
            } else {
                format!("{immediate_wins:?}")
            },
        ),
        ("Nodes", format_number(stats.nodes)),
        ("Terminals", format_number(stats.terminals)),
        ("Cutoffs", format_number(stats.cutoffs)),
    ]);

    if let Some(path) = args.export {
        let report = SolveReport {
            board: board.encode(),
            to_play: position.to_play.to_char(),
            maximizing: position.maximizing,
            engine: engine.name(),
            tie_break: config.tie_break.as_str(),
            score: result.score,
            best_move,
            result_board: result.board.encode(),
            stats,
        };
        export_report(&report, &path)?;
        println!("\nResult exported to: {}", path.display());
    }

    Ok(())
}

fn export_report(report: &SolveReport, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}
