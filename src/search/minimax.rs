//! Plain minimax, no pruning

use tracing::debug;

use super::{DRAW, SearchEngine, SearchResult, SearchStats, TieBreak, terminal_score};
use crate::tictactoe::{Board, Player, evaluate, generate};

/// Exhaustive minimax engine. Every node of the tree below the root is
/// visited; from the empty board that is 549,946 boards.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    tie_break: TieBreak,
    stats: SearchStats,
}

impl Minimax {
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            tie_break,
            stats: SearchStats::default(),
        }
    }

    fn minimax(&mut self, board: &Board, maximizing: bool, to_play: Player) -> SearchResult {
        self.stats.nodes += 1;

        if let Some(score) = terminal_score(evaluate(board), maximizing) {
            self.stats.terminals += 1;
            return SearchResult {
                score,
                board: *board,
            };
        }

        let mut best: Option<SearchResult> = None;
        for child in generate(board, to_play) {
            let score = self.minimax(&child, !maximizing, to_play.opponent()).score;
            let candidate = SearchResult {
                score,
                board: child,
            };
            if best.is_none_or(|current| self.tie_break.prefers(&candidate, &current, maximizing))
            {
                best = Some(candidate);
            }
        }

        // A board without children is full, and evaluate already scored full
        // boards; keep the draw value for consistency.
        best.unwrap_or(SearchResult {
            score: DRAW,
            board: *board,
        })
    }
}

impl SearchEngine for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn search(&mut self, board: &Board, maximizing: bool, to_play: Player) -> SearchResult {
        self.stats = SearchStats::default();
        let result = self.minimax(board, maximizing, to_play);
        debug!(
            engine = self.name(),
            board = %board.encode(),
            score = result.score,
            nodes = self.stats.nodes,
            "search complete"
        );
        result
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Search `board` exhaustively with the default [`TieBreak`].
///
/// # Examples
///
/// ```
/// use tictactoe_search::search::search_minimax;
/// use tictactoe_search::tictactoe::{Board, Player};
///
/// let board = Board::from_string("XX./OO./...").unwrap();
/// let result = search_minimax(&board, true, Player::X);
/// assert_eq!(result.score, 1);
/// assert_eq!(result.best_move(&board), Some(2));
/// ```
pub fn search_minimax(board: &Board, maximizing: bool, to_play: Player) -> SearchResult {
    Minimax::default().search(board, maximizing, to_play)
}
