//! Tic-Tac-Toe board model, terminal-state evaluation and move generation

pub mod board;
pub mod game_tree;
pub mod lines;
pub mod movegen;
pub mod status;
pub mod validation;

pub use board::{BOARD_CELLS, Board, Cell, Player};
pub use game_tree::{Position, depth_histogram, reachable_positions};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use movegen::generate;
pub use status::{BoardStatus, evaluate};
