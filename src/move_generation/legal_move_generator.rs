//! Legal move enumeration and terminal-state queries.
//!
//! Every one of the 64 destination squares is run through
//! `MoveValidator::is_valid_move`. Output order is row-major
//! over source squares, then row-major over destinations, then promotion
//! kinds (queen, rook, bishop, knight). Agents rely on this order for
//! deterministic tie-breaking.

use crate::game_state::chess_rules::{promotion_row, PROMOTION_KINDS};
use crate::game_state::chess_types::*;
use crate::move_generation::move_validator::MoveValidator;

impl MoveValidator {
    /// Legal moves of the piece on `square`, which must belong to `color`.
    pub fn valid_moves_for(&self, square: Square, color: Color) -> Vec<Move> {
        match self.piece_at(square) {
            Some(piece) if piece.color == color => Square::all()
                .filter(|&to| self.is_valid_move(square, to, color))
                .map(|to| Move::new(square, to))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Every legal move for `color`, one entry per (from, to) pair.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        for from in Square::all() {
            out.extend(self.valid_moves_for(from, color));
        }
        out
    }

    /// Every legal move for `color` with each promoting pawn move expanded
    /// into one entry per promotion kind.
    pub fn legal_moves_with_promotions(&self, color: Color) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        for from in Square::all() {
            let is_pawn = self.piece_at(from) == Some(Piece::new(color, PieceKind::Pawn));
            for mv in self.valid_moves_for(from, color) {
                if is_pawn && mv.to.row() == promotion_row(color) {
                    out.extend(PROMOTION_KINDS.iter().map(|&kind| mv.with_promotion(kind)));
                } else {
                    out.push(mv);
                }
            }
        }
        out
    }

    pub fn has_any_legal_moves(&self, color: Color) -> bool {
        self.position()
            .squares_of(color)
            .any(|from| !self.valid_moves_for(from, color).is_empty())
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_king_in_check(color) && !self.has_any_legal_moves(color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_king_in_check(color) && !self.has_any_legal_moves(color)
    }
}
