//! Common test utilities for the search test suite.

#![allow(dead_code)]

use tictactoe_search::tictactoe::{Board, Player, Position, reachable_positions};

/// Parse a board literal, panicking on malformed test input.
pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap_or_else(|e| panic!("bad test board '{s}': {e}"))
}

/// Every position reachable from the empty board with X opening.
pub fn x_first_positions() -> Vec<Position> {
    reachable_positions(Player::X)
}

/// Reachable positions that are still being played.
pub fn open_positions() -> Vec<Position> {
    x_first_positions()
        .into_iter()
        .filter(|p| !p.board.is_terminal())
        .collect()
}
