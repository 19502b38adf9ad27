//! Minimax with alpha-beta pruning

use tracing::debug;

use super::{
    ALPHA_MIN, BETA_MAX, DRAW, Score, SearchEngine, SearchResult, SearchStats, TieBreak,
    terminal_score,
};
use crate::tictactoe::{Board, Player, evaluate, generate};

/// Alpha-beta engine.
///
/// Returns the same score and the same root move as
/// [`Minimax`](super::Minimax) under either [`TieBreak`]. First-best never
/// replaces on a tie, so a pruned sibling could not have been chosen. Board
/// order does replace on ties, so it keeps searching siblings that can still
/// reach the bound and cuts only when the window inverts.
#[derive(Debug, Clone)]
pub struct AlphaBeta {
    tie_break: TieBreak,
    alpha: Score,
    beta: Score,
    stats: SearchStats,
}

impl AlphaBeta {
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            tie_break,
            alpha: ALPHA_MIN,
            beta: BETA_MAX,
            stats: SearchStats::default(),
        }
    }

    /// Set the root window used by [`SearchEngine::search`]
    pub fn with_window(mut self, alpha: Score, beta: Score) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Search with an explicit root window, resetting the statistics first
    pub fn search_window(
        &mut self,
        board: &Board,
        maximizing: bool,
        to_play: Player,
        alpha: Score,
        beta: Score,
    ) -> SearchResult {
        self.stats = SearchStats::default();
        let result = self.alphabeta(board, maximizing, to_play, alpha, beta);
        debug!(
            engine = self.name(),
            board = %board.encode(),
            alpha,
            beta,
            score = result.score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "search complete"
        );
        result
    }

    fn alphabeta(
        &mut self,
        board: &Board,
        maximizing: bool,
        to_play: Player,
        mut alpha: Score,
        mut beta: Score,
    ) -> SearchResult {
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
            let score = self
                .alphabeta(&child, !maximizing, to_play.opponent(), alpha, beta)
                .score;
            let candidate = SearchResult {
                score,
                board: child,
            };
            if best.is_none_or(|current| self.tie_break.prefers(&candidate, &current, maximizing))
            {
                best = Some(candidate);
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if self.tie_break.cuts(alpha, beta) {
                self.stats.cutoffs += 1;
                break;
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

impl Default for AlphaBeta {
    fn default() -> Self {
        Self::new(TieBreak::default())
    }
}

impl SearchEngine for AlphaBeta {
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    fn search(&mut self, board: &Board, maximizing: bool, to_play: Player) -> SearchResult {
        self.search_window(board, maximizing, to_play, self.alpha, self.beta)
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Search `board` with alpha-beta pruning from the given window, using the
/// default [`TieBreak`]. Pass [`ALPHA_MIN`] and [`BETA_MAX`] for a full search.
pub fn search_alphabeta(
    board: &Board,
    maximizing: bool,
    to_play: Player,
    alpha: Score,
    beta: Score,
) -> SearchResult {
    AlphaBeta::default().search_window(board, maximizing, to_play, alpha, beta)
}
