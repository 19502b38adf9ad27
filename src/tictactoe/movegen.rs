//! Successor board generation

use super::{Board, Cell, Player};

/// Generate every board reachable by `player` placing one symbol.
///
/// Children come out in ascending cell order (0 through 8), one per empty
/// cell. A full board yields no children; callers check for a terminal board
/// before asking for moves, so this is not treated as an error.
pub fn generate(board: &Board, player: Player) -> Vec<Board> {
    let symbol = player.to_cell();
    board
        .cells
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Cell::Empty)
        .map(|(pos, _)| {
            let mut child = *board;
            child.cells[pos] = symbol;
            child
        })
        .collect()
}

impl Board {
    /// Successor boards for `player`, see [`generate`]
    pub fn children(&self, player: Player) -> Vec<Board> {
        generate(self, player)
    }
}
