//! Compare command - Run both engines on one position side-by-side

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::info;

use crate::{
    cli::{
        config::{PositionArgs, SearchArgs},
        output::{format_number, print_section},
    },
    search::{AlphaBeta, Minimax, SearchEngine, TieBreak},
};

#[derive(Parser, Debug)]
#[command(about = "Run minimax and alpha-beta on the same position")]
pub struct CompareArgs {
    #[command(flatten)]
    pub position: PositionArgs,

    /// JSON configuration file (tie-break policy and alpha-beta window)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tie-break policy among equally scored moves
    #[arg(long, value_enum)]
    pub tie_break: Option<TieBreak>,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let position = args.position.resolve()?;
    let config = SearchArgs {
        config: args.config,
        engine: None,
        tie_break: args.tie_break,
    }
    .resolve()?;
    let board = position.board;

    let mut engines: Vec<Box<dyn SearchEngine>> = vec![
        Box::new(Minimax::new(config.tie_break)),
        Box::new(AlphaBeta::new(config.tie_break).with_window(config.alpha, config.beta)),
    ];

    print_section("Engine Comparison");
    println!("{board}");
    println!();
    println!(
        "{:<12} {:>6} {:>6} {:>10} {:>10} {:>8}",
        "Engine", "Score", "Move", "Nodes", "Terminals", "Cutoffs"
    );

    let mut results = Vec::with_capacity(engines.len());
    for engine in engines.iter_mut() {
        let result = engine.search(&board, position.maximizing, position.to_play);
        let stats = engine.stats();
        println!(
            "{:<12} {:>+6} {:>6} {:>10} {:>10} {:>8}",
            engine.name(),
            result.score,
            result
                .best_move(&board)
                .map_or_else(|| "-".to_string(), |m| m.to_string()),
            format_number(stats.nodes),
            format_number(stats.terminals),
            format_number(stats.cutoffs),
        );
        results.push((engine.name(), result, stats));
    }

    let (_, minimax, minimax_stats) = results[0];
    let (_, alphabeta, alphabeta_stats) = results[1];

    println!();
    if minimax_stats.nodes > 0 {
        let saved = 100.0 * (1.0 - alphabeta_stats.nodes as f64 / minimax_stats.nodes as f64);
        println!("Pruning skipped {saved:.1}% of the nodes minimax visited");
    }

    if minimax.score != alphabeta.score {
        bail!(
            "engines disagree on the score: minimax {:+}, alpha-beta {:+}",
            minimax.score,
            alphabeta.score
        );
    }
    println!("Scores agree: {:+}", minimax.score);

    if minimax.board != alphabeta.board {
        bail!(
            "engines chose different moves under tie-break '{}': minimax {}, alpha-beta {}",
            config.tie_break.as_str(),
            minimax.board.encode(),
            alphabeta.board.encode()
        );
    }
    println!("Chosen moves agree");

    info!(
        score = minimax.score,
        minimax_nodes = minimax_stats.nodes,
        alphabeta_nodes = alphabeta_stats.nodes,
        "comparison complete"
    );

    Ok(())
}
