//! Search configuration

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{
    ALPHA_MIN, AlphaBeta, BETA_MAX, LOSS, Minimax, Score, SearchEngine, SearchResult, WIN,
};

/// Which engine runs a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EngineKind {
    /// Exhaustive minimax, visits every node
    Minimax,
    /// Minimax with alpha-beta pruning
    #[default]
    AlphaBeta,
}

/// How to choose among children with equal scores
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Keep the earliest child in generation order; replace only on strict improvement
    #[default]
    FirstBest,
    /// Compare (score, board ordering key) pairs; the greatest pair wins for the
    /// maximizer, the least for the minimizer
    BoardOrder,
}

impl TieBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            TieBreak::FirstBest => "first-best",
            TieBreak::BoardOrder => "board-order",
        }
    }

    /// Whether `candidate` should replace `current` as the best child
    pub fn prefers(
        self,
        candidate: &SearchResult,
        current: &SearchResult,
        maximizing: bool,
    ) -> bool {
        match self {
            TieBreak::FirstBest => {
                if maximizing {
                    candidate.score > current.score
                } else {
                    candidate.score < current.score
                }
            }
            TieBreak::BoardOrder => {
                let candidate_key = (candidate.score, candidate.board.ordering_key());
                let current_key = (current.score, current.board.ordering_key());
                if maximizing {
                    candidate_key > current_key
                } else {
                    candidate_key < current_key
                }
            }
        }
    }

    /// Whether alpha-beta may skip the remaining siblings.
    ///
    /// Board order lets an equal score replace the best child, so a sibling
    /// scoring exactly at the bound must still be searched exactly. It only
    /// cuts once the window is inverted.
    pub fn cuts(self, alpha: Score, beta: Score) -> bool {
        match self {
            TieBreak::FirstBest => beta <= alpha,
            TieBreak::BoardOrder => beta < alpha,
        }
    }
}

/// Configuration for building a search engine.
///
/// # Examples
///
/// ```
/// use tictactoe_search::search::{EngineKind, SearchConfig, TieBreak};
///
/// let config = SearchConfig::new(EngineKind::Minimax).with_tie_break(TieBreak::BoardOrder);
/// assert_eq!(config.engine, EngineKind::Minimax);
/// assert_eq!(config.alpha, -2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Engine to run
    pub engine: EngineKind,
    /// Tie-break policy shared by both engines
    pub tie_break: TieBreak,
    /// Initial alpha bound for the alpha-beta engine
    pub alpha: Score,
    /// Initial beta bound for the alpha-beta engine
    pub beta: Score,
}

impl SearchConfig {
    /// Create a configuration for the given engine with the default bounds
    /// and tie-break policy.
    pub fn new(engine: EngineKind) -> Self {
        Self {
            engine,
            tie_break: TieBreak::default(),
            alpha: ALPHA_MIN,
            beta: BETA_MAX,
        }
    }

    /// Set the tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Set the alpha-beta root window.
    pub fn with_window(mut self, alpha: Score, beta: Score) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] when the window does not
    /// cover every game value, since alpha-beta then reports bounds instead of
    /// scores.
    pub fn validate(&self) -> crate::Result<()> {
        if self.alpha > LOSS || self.beta < WIN {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "alpha-beta window (alpha {}, beta {}) must cover [{LOSS}, {WIN}]",
                    self.alpha, self.beta
                ),
            });
        }
        Ok(())
    }

    /// Build the configured engine.
    pub fn build_engine(&self) -> Box<dyn SearchEngine> {
        match self.engine {
            EngineKind::Minimax => Box::new(Minimax::new(self.tie_break)),
            EngineKind::AlphaBeta => Box::new(
                AlphaBeta::new(self.tie_break).with_window(self.alpha, self.beta),
            ),
        }
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load and validate configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let file = std::fs::File::open(path)?;
        let config: SearchConfig = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(EngineKind::default())
    }
}
