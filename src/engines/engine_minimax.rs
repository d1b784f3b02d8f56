//! Material-only minimax agent with iterative deepening.

use crate::engines::engine_trait::ChessAgent;
use crate::game_state::chess_types::{Color, Move};
use crate::move_generation::move_validator::MoveValidator;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::minimax::{iterative_deepening_search, SearchConfig, SearchReport};

pub struct MinimaxAgent<S: BoardScorer = MaterialScorer> {
    config: SearchConfig,
    scorer: S,
    last_report: Option<SearchReport>,
}

impl MinimaxAgent<MaterialScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(config, MaterialScorer)
    }
}

impl<S: BoardScorer> MinimaxAgent<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        Self {
            config,
            scorer,
            last_report: None,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Statistics from the most recent `choose_move` call.
    pub fn last_report(&self) -> Option<&SearchReport> {
        self.last_report.as_ref()
    }
}

impl Default for MinimaxAgent<MaterialScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> ChessAgent for MinimaxAgent<S> {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn new_game(&mut self) {
        self.last_report = None;
    }

    fn choose_move(&mut self, validator: &mut MoveValidator, color: Color) -> Move {
        let report = iterative_deepening_search(validator, color, &self.scorer, self.config);
        let best = report.best_move;
        self.last_report = Some(report);
        best
    }
}
