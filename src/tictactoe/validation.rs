//! Board reachability validation
//!
//! The search engines accept any well-formed board. These checks are for
//! callers that want to reject positions that cannot arise in a real game.

use super::{
    WINNING_LINES,
    board::{Board, Player},
};

impl Board {
    /// Check if the board could arise from alternating play starting with
    /// either symbol.
    pub fn is_valid(&self) -> bool {
        let count = self.count_pieces();

        // Piece counts must differ by at most 1 in either direction.
        if count.x.abs_diff(count.o) > 1 {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }

        // The winner moved last, so they cannot be behind on pieces.
        if x_wins && count.x < count.o {
            return false;
        }
        if o_wins && count.o < count.x {
            return false;
        }

        // Several winning lines must have been completed by a single move.
        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if a player has three in a row anywhere on the board
    pub fn has_won(&self, player: Player) -> bool {
        super::lines::LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if all winning lines for a player share at least one cell
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let cell = player.to_cell();
        let winning_lines: Vec<&[usize; 3]> = WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| self.cells[idx] == cell))
            .collect();

        if winning_lines.len() < 2 {
            return true;
        }

        (0..9).any(|pos| winning_lines.iter().all(|line| line.contains(&pos)))
    }

    /// Validate the board for play, returning the side to move when X opened.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] for impossible counts and
    /// [`crate::Error::InvalidConfiguration`] for impossible win patterns.
    pub fn validate(&self) -> Result<Player, crate::Error> {
        let to_move = self.infer_to_move()?;
        if !self.is_valid() {
            return Err(crate::Error::InvalidConfiguration {
                message: format!("board '{}' cannot arise in a real game", self.encode()),
            });
        }
        Ok(to_move)
    }
}
