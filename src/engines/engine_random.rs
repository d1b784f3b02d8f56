//! Uniform random-move agent.
//!
//! Used as a sparring partner in self-play and as a cheap legality smoke
//! test. Pawns reaching the last rank always promote to a queen.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::ChessAgent;
use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::*;
use crate::move_generation::move_validator::MoveValidator;

pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Reproducible agent for tests and scripted matches.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessAgent for RandomAgent {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, validator: &mut MoveValidator, color: Color) -> Move {
        let legal_moves = validator.legal_moves(color);
        log::trace!("random agent: {} legal moves", legal_moves.len());

        match legal_moves.choose(&mut self.rng) {
            Some(&mv) => {
                let pawn = Piece::new(color, PieceKind::Pawn);
                if validator.piece_at(mv.from) == Some(pawn) && mv.to.row() == promotion_row(color) {
                    mv.with_promotion(PieceKind::Queen)
                } else {
                    mv
                }
            }
            None => Move::NONE,
        }
    }
}
