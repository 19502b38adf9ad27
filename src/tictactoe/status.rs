//! Terminal-state classification

use serde::{Deserialize, Serialize};

use super::{Board, Player, lines::LineAnalyzer};

/// Classification of a board: still being played, won, or drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl BoardStatus {
    /// Check if the game is over (win or draw)
    pub fn is_terminal(self) -> bool {
        !matches!(self, BoardStatus::InProgress)
    }

    /// Get the winner if there is one
    pub fn winner(self) -> Option<Player> {
        match self {
            BoardStatus::Won(player) => Some(player),
            BoardStatus::InProgress | BoardStatus::Draw => None,
        }
    }

    /// Split into the `(is_terminal, winner)` pair
    pub fn into_parts(self) -> (bool, Option<Player>) {
        (self.is_terminal(), self.winner())
    }
}

/// Classify a board.
///
/// Lines are checked in [`WINNING_LINES`](super::WINNING_LINES) order and the
/// first complete one decides the winner. A full board without a complete line
/// is a draw.
///
/// # Examples
///
/// ```
/// use tictactoe_search::tictactoe::{Board, BoardStatus, Player, evaluate};
///
/// let board = Board::from_string("XXX/OO./...").unwrap();
/// assert_eq!(evaluate(&board), BoardStatus::Won(Player::X));
/// assert_eq!(evaluate(&Board::new()).into_parts(), (false, None));
/// ```
pub fn evaluate(board: &Board) -> BoardStatus {
    if let Some((_, winner)) = LineAnalyzer::completed_line(&board.cells) {
        BoardStatus::Won(winner)
    } else if board.is_full() {
        BoardStatus::Draw
    } else {
        BoardStatus::InProgress
    }
}

impl Board {
    /// Classify this board, see [`evaluate`]
    pub fn status(&self) -> BoardStatus {
        evaluate(self)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        self.status().winner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_progress() {
        let board = Board::from_string("XO.......").unwrap();
        assert_eq!(evaluate(&board), BoardStatus::InProgress);
        assert_eq!(evaluate(&board).into_parts(), (false, None));
    }

    #[test]
    fn test_win_detection_horizontal() {
        let board = Board::from_string("XXX/OO./...").unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_win_detection_vertical() {
        // O wins on middle column (1, 4, 7)
        let board = Board::from_string("XOX/.OX/.O.").unwrap();
        assert_eq!(evaluate(&board).into_parts(), (true, Some(Player::O)));
    }

    #[test]
    fn test_win_on_full_board_is_not_a_draw() {
        // X completes the main diagonal with the last empty cell
        let board = Board::from_string("XOO/OXX/XOX").unwrap();
        assert_eq!(evaluate(&board), BoardStatus::Won(Player::X));
    }

    #[test]
    fn test_draw_detection() {
        let board = Board::from_string("XOX/XOO/OXX").unwrap();
        assert_eq!(evaluate(&board), BoardStatus::Draw);
        assert_eq!(evaluate(&board).into_parts(), (true, None));
    }
}
