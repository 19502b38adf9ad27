//! Enumeration of positions reachable in real play

use std::collections::{HashSet, VecDeque};

use super::{Board, Player, generate};

/// A reachable board together with the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub to_move: Player,
}

/// Collect every board reachable from the empty board with `first` moving
/// first, terminal boards included, sorted by encoding.
///
/// With either opening symbol this is the classic 5,478 positions.
pub fn reachable_positions(first: Player) -> Vec<Position> {
    let root = Position {
        board: Board::new(),
        to_move: first,
    };
    let mut visited = HashSet::from([root.board]);
    let mut queue = VecDeque::from([root]);
    let mut positions = Vec::new();

    while let Some(position) = queue.pop_front() {
        positions.push(position);

        if position.board.is_terminal() {
            continue;
        }

        for child in generate(&position.board, position.to_move) {
            if visited.insert(child) {
                queue.push_back(Position {
                    board: child,
                    to_move: position.to_move.opponent(),
                });
            }
        }
    }

    positions.sort_by_key(|p| p.board.encode());
    positions
}

/// Count boards by number of occupied cells (index 0 through 9)
pub fn depth_histogram(positions: &[Position]) -> [usize; 10] {
    let mut counts = [0usize; 10];
    for position in positions {
        counts[position.board.occupied_count()] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_positions_match_expected() {
        let positions = reachable_positions(Player::X);
        assert_eq!(positions.len(), 5478);
        assert!(positions.iter().all(|p| p.board.is_valid()));
    }

    #[test]
    fn depth_histogram_matches_expected() {
        let positions = reachable_positions(Player::X);
        assert_eq!(
            depth_histogram(&positions),
            [1, 9, 72, 252, 756, 1260, 1520, 1140, 390, 78]
        );
    }

    #[test]
    fn side_to_move_follows_piece_counts() {
        for position in reachable_positions(Player::X) {
            let count = position.board.count_pieces();
            let expected = if count.x == count.o {
                Player::X
            } else {
                Player::O
            };
            assert_eq!(position.to_move, expected);
        }
    }
}
