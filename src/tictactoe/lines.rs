//! Winning line analysis for Tic-Tac-Toe

use std::collections::BTreeSet;

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, in the order they are checked
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Find the first completed line in table order and the symbol filling it.
    ///
    /// Stops at the first match, so a malformed board with several complete
    /// lines reports whichever comes first in [`WINNING_LINES`].
    pub fn completed_line(cells: &[Cell; 9]) -> Option<([usize; 3], Player)> {
        WINNING_LINES.iter().find_map(|&line| {
            let owner = cells[line[0]].to_player()?;
            line.iter()
                .all(|&idx| cells[idx] == cells[line[0]])
                .then_some((line, owner))
        })
    }

    /// Whether `player` fills any line, wherever it falls in table order
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx].to_player() == Some(player)))
    }

    /// Cells where `player` completes a line with one move, in ascending order
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> BTreeSet<usize> {
        WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .collect()
    }

    /// The empty cell that completes `line` for `player`, if the player
    /// already holds the other two
    fn winning_move_in_line(
        cells: &[Cell; 9],
        player: Player,
        line: &[usize; 3],
    ) -> Option<usize> {
        let owned = line
            .iter()
            .filter(|&&idx| cells[idx].to_player() == Some(player))
            .count();
        let mut empties = line.iter().copied().filter(|&idx| cells[idx] == Cell::Empty);
        match (owned, empties.next(), empties.next()) {
            (2, Some(idx), None) => Some(idx),
            _ => None,
        }
    }
}
