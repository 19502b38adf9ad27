//! Shared argument and configuration types for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, warn};

use crate::{
    search::{EngineKind, SearchConfig, TieBreak},
    tictactoe::{Board, Player},
};

/// The position to search
#[derive(Args, Debug, Clone)]
pub struct PositionArgs {
    /// Board as 9 cells, e.g. "XX./OO./..." ('.', '_' or '-' for empty)
    pub board: String,

    /// Symbol to play next (`x` or `o`); inferred from piece counts when omitted
    #[arg(long)]
    pub to_play: Option<String>,

    /// Search with the side to play as the minimizing player
    #[arg(long)]
    pub minimizing: bool,
}

/// A parsed position ready for searching
#[derive(Debug, Clone, Copy)]
pub struct ResolvedPosition {
    pub board: Board,
    pub to_play: Player,
    pub maximizing: bool,
}

impl PositionArgs {
    pub fn resolve(&self) -> Result<ResolvedPosition> {
        let board = Board::from_string(&self.board)?;
        let to_play = match &self.to_play {
            Some(symbol) => symbol
                .parse::<Player>()
                .with_context(|| format!("invalid value for --to-play: '{symbol}'"))?,
            None => board
                .infer_to_move()
                .context("cannot infer the side to play; pass --to-play")?,
        };

        if !board.is_valid() {
            warn!(board = %board.encode(), "board is not reachable in real play; searching anyway");
        }

        Ok(ResolvedPosition {
            board,
            to_play,
            maximizing: !self.minimizing,
        })
    }
}

/// Engine selection, shared by commands that run a search
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// JSON configuration file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Search engine
    #[arg(long, value_enum)]
    pub engine: Option<EngineKind>,

    /// Tie-break policy among equally scored moves
    #[arg(long, value_enum)]
    pub tie_break: Option<TieBreak>,
}

impl SearchArgs {
    /// Build the effective configuration: file (or defaults), then flags.
    pub fn resolve(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => SearchConfig::default(),
        };

        if let Some(engine) = self.engine {
            config.engine = engine;
        }
        if let Some(tie_break) = self.tie_break {
            config.tie_break = tie_break;
        }

        debug!(?config, "resolved search configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(board: &str, to_play: Option<&str>) -> PositionArgs {
        PositionArgs {
            board: board.to_string(),
            to_play: to_play.map(str::to_string),
            minimizing: false,
        }
    }

    #[test]
    fn to_play_is_inferred_from_counts() {
        let resolved = position("X........", None).resolve().unwrap();
        assert_eq!(resolved.to_play, Player::O);
        assert!(resolved.maximizing);
    }

    #[test]
    fn explicit_to_play_wins_over_counts() {
        let resolved = position("X........", Some("x")).resolve().unwrap();
        assert_eq!(resolved.to_play, Player::X);
    }

    #[test]
    fn invalid_symbol_is_rejected() {
        assert!(position(".........", Some("z")).resolve().is_err());
    }

    #[test]
    fn uninferable_counts_need_explicit_symbol() {
        assert!(position("XXX......", None).resolve().is_err());
        assert!(position("XXX......", Some("o")).resolve().is_ok());
    }

    #[test]
    fn flags_override_defaults() {
        let args = SearchArgs {
            config: None,
            engine: Some(EngineKind::Minimax),
            tie_break: Some(TieBreak::BoardOrder),
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.engine, EngineKind::Minimax);
        assert_eq!(config.tie_break, TieBreak::BoardOrder);
    }
}
