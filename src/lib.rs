//! Exhaustive game-tree search for Tic-Tac-Toe
//!
//! This crate provides:
//! - A value-type board model with terminal-state evaluation and move generation
//! - Plain minimax and alpha-beta search engines that explore to terminal states
//! - Configurable tie-breaking shared by both engines
//! - A diagnostic CLI for solving and cross-checking positions

pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{
    ALPHA_MIN, AlphaBeta, BETA_MAX, EngineKind, Minimax, Score, SearchConfig, SearchEngine,
    SearchResult, SearchStats, TieBreak, search_alphabeta, search_minimax,
};
pub use tictactoe::{Board, BoardStatus, Cell, Player, evaluate, generate};
