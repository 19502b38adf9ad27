//! Verify command - Cross-check both engines on every reachable position

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    cli::{
        config::SearchArgs,
        output::{create_verify_progress, format_number, print_section, print_stats_table},
    },
    search::{AlphaBeta, Minimax, SearchConfig, SearchEngine, TieBreak},
    tictactoe::{Player, Position, depth_histogram, reachable_positions},
};

#[derive(Parser, Debug)]
#[command(about = "Check minimax and alpha-beta agree on every reachable position")]
pub struct VerifyArgs {
    /// JSON configuration file (tie-break policy and alpha-beta window)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tie-break policy among equally scored moves
    #[arg(long, value_enum)]
    pub tie_break: Option<TieBreak>,

    /// Symbol that opens the game (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first: String,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,
}

/// Totals from a cross-check run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrossCheckSummary {
    /// Searches run per engine (each position from both perspectives)
    pub searches: usize,
    pub score_mismatches: usize,
    pub board_mismatches: usize,
    /// Alpha-beta choices whose exact value differs from the reported score
    pub suboptimal_moves: usize,
    pub minimax_nodes: u64,
    pub alphabeta_nodes: u64,
}

/// Search every position from both perspectives with both engines and
/// count disagreements. Each alpha-beta choice is also re-searched exactly
/// to check it is worth the reported score. `on_position` runs after each
/// position.
pub fn cross_check<F>(
    positions: &[Position],
    config: &SearchConfig,
    mut on_position: F,
) -> CrossCheckSummary
where
    F: FnMut(&Position),
{
    let mut minimax = Minimax::new(config.tie_break);
    let mut alphabeta = AlphaBeta::new(config.tie_break).with_window(config.alpha, config.beta);
    let mut exact = Minimax::new(config.tie_break);
    let mut summary = CrossCheckSummary::default();

    for position in positions {
        for maximizing in [true, false] {
            let expected = minimax.search(&position.board, maximizing, position.to_move);
            let actual = alphabeta.search(&position.board, maximizing, position.to_move);
            summary.searches += 1;
            summary.minimax_nodes += minimax.stats().nodes;
            summary.alphabeta_nodes += alphabeta.stats().nodes;

            if expected.score != actual.score {
                summary.score_mismatches += 1;
                warn!(
                    board = %position.board.encode(),
                    maximizing,
                    minimax = expected.score,
                    alphabeta = actual.score,
                    "score mismatch"
                );
            }
            if expected.board != actual.board {
                summary.board_mismatches += 1;
            }
            if actual.board != position.board {
                let value = exact
                    .search(&actual.board, !maximizing, position.to_move.opponent())
                    .score;
                if value != actual.score {
                    summary.suboptimal_moves += 1;
                    warn!(
                        board = %position.board.encode(),
                        maximizing,
                        chosen = %actual.board.encode(),
                        reported = actual.score,
                        value,
                        "alpha-beta chose a move worth less than its score"
                    );
                }
            }
        }
        on_position(position);
    }

    summary
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let config = SearchArgs {
        config: args.config,
        engine: None,
        tie_break: args.tie_break,
    }
    .resolve()?;
    let first: Player = args.first.parse()?;

    let positions = reachable_positions(first);
    info!(
        positions = positions.len(),
        first = %first,
        tie_break = config.tie_break.as_str(),
        "verifying engines"
    );

    let progress = if args.quiet {
        None
    } else {
        Some(create_verify_progress(positions.len() as u64)?)
    };

    let summary = cross_check(&positions, &config, |position| {
        if let Some(pb) = &progress {
            pb.set_message(position.board.encode());
            pb.inc(1);
        }
    });

    if let Some(pb) = progress {
        pb.finish_with_message("done");
    }

    print_section("Verification");
    print_stats_table(&[
        ("Positions", format_number(positions.len() as u64)),
        ("Searches", format_number(summary.searches as u64)),
        ("Tie-break", config.tie_break.as_str().to_string()),
        ("Score mismatches", summary.score_mismatches.to_string()),
        ("Move mismatches", summary.board_mismatches.to_string()),
        ("Suboptimal moves", summary.suboptimal_moves.to_string()),
        ("Minimax nodes", format_number(summary.minimax_nodes)),
        ("Alpha-beta nodes", format_number(summary.alphabeta_nodes)),
    ]);

    println!("\nPositions by occupied cells:");
    for (depth, count) in depth_histogram(&positions).iter().enumerate() {
        println!("  {depth}: {count}");
    }

    if summary.score_mismatches > 0 {
        bail!(
            "{} searches returned different scores",
            summary.score_mismatches
        );
    }
    if summary.suboptimal_moves > 0 {
        bail!(
            "{} alpha-beta searches chose a move worth less than the reported score",
            summary.suboptimal_moves
        );
    }
    if summary.board_mismatches > 0 {
        bail!(
            "{} searches chose different moves under tie-break '{}'",
            summary.board_mismatches,
            config.tie_break.as_str()
        );
    }

    println!("\nEngines agree on every reachable position");
    Ok(())
}
