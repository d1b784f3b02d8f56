//! Perft: leaf-node counting over the legal move tree.
//!
//! Walks the tree with the same in-place execute/restore discipline the
//! search agent uses, so it doubles as a check that `save_state` and
//! `restore_state` leave no residue behind.

use crate::game_state::chess_types::Color;
use crate::move_generation::move_validator::MoveValidator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count positions reachable in exactly `depth` plies with `color` to move.
pub fn perft(validator: &mut MoveValidator, color: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for candidate in validator.legal_moves_with_promotions(color) {
        let saved = validator.save_state();
        let mut mv = candidate;
        if validator.execute_move(&mut mv, color).is_err() {
            validator.restore_state(&saved);
            continue;
        }

        if depth == 1 {
            total.nodes += 1;
            total.captures += u64::from(mv.captured.is_some());
            total.en_passant += u64::from(mv.en_passant);
            total.castles += u64::from(mv.castling);
            total.promotions += u64::from(mv.promoted_to.is_some());
            if validator.is_king_in_check(color.opposite()) {
                total.checks += 1;
                total.checkmates += u64::from(!validator.has_any_legal_moves(color.opposite()));
            }
        } else {
            total.merge(perft(validator, color.opposite(), depth - 1));
        }

        validator.restore_state(&saved);
    }
    total
}
