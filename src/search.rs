//! Exhaustive game-tree search
//!
//! Both engines search to terminal positions and score them from the fixed
//! perspective of the maximizing player: `+1` win, `0` draw, `-1` loss. Scores
//! are not discounted by depth.
//!
//! A terminal board is scored by whose turn it would be next. If the game is
//! over when it is the maximizer's turn, the minimizer made the last move, so
//! a decisive result counts as a loss for the maximizer, and vice versa.

pub mod alphabeta;
pub mod config;
pub mod minimax;

use serde::Serialize;

use crate::tictactoe::{Board, BoardStatus, Player};

pub use alphabeta::{AlphaBeta, search_alphabeta};
pub use config::{EngineKind, SearchConfig, TieBreak};
pub use minimax::{Minimax, search_minimax};

/// Game-theoretic value from the maximizing player's perspective
pub type Score = i32;

pub const WIN: Score = 1;
pub const DRAW: Score = 0;
pub const LOSS: Score = -1;

/// Root alpha strictly below every reachable score, so it never prunes
pub const ALPHA_MIN: Score = -2;
/// Root beta strictly above every reachable score, so it never prunes
pub const BETA_MAX: Score = 2;

/// Outcome of a search: the value and the board after the chosen move.
///
/// When the searched board is already terminal, `board` is that board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub score: Score,
    pub board: Board,
}

impl SearchResult {
    /// The cell the chosen move occupies, relative to the searched board
    pub fn best_move(&self, searched: &Board) -> Option<usize> {
        searched.find_changed_position(&self.board)
    }
}

/// Counters collected during one root search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Boards visited, root included
    pub nodes: u64,
    /// Visited boards that were terminal
    pub terminals: u64,
    /// Sibling loops cut short by the alpha-beta bounds
    pub cutoffs: u64,
}

/// A search engine that can be driven through a trait object
pub trait SearchEngine {
    /// Short engine name for reporting
    fn name(&self) -> &'static str;

    /// Search `board` with `to_play` placing the next symbol. Resets the
    /// statistics before starting.
    fn search(&mut self, board: &Board, maximizing: bool, to_play: Player) -> SearchResult;

    /// Statistics of the most recent search
    fn stats(&self) -> SearchStats;
}

/// Score of a terminal board, or `None` if play continues.
pub(crate) fn terminal_score(status: BoardStatus, maximizing: bool) -> Option<Score> {
    match status {
        BoardStatus::InProgress => None,
        BoardStatus::Draw => Some(DRAW),
        BoardStatus::Won(_) if maximizing => Some(LOSS),
        BoardStatus::Won(_) => Some(WIN),
    }
}
