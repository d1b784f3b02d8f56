//! Move legality and execution.
//!
//! `MoveValidator` owns the `Position` together with the auxiliary state the
//! board alone cannot express (castling rights and the en-passant target).
//! It is the only component that decides whether a move is legal, and the
//! only one that applies moves to the board.
//!
//! Legality is checked in stages: bounds and ownership, the piece's movement
//! shape (including the full castling precondition chain), and finally a
//! simulation on a scratch copy of the board to make sure the mover's king is
//! not left attacked.

use crate::errors::{ChessError, ChessResult, MoveRejection};
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::position::{Position, PositionSnapshot};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::moves::bishop_moves::bishop_reaches;
use crate::moves::king_moves::{is_castling_shape, is_king_step};
use crate::moves::knight_moves::is_knight_shape;
use crate::moves::pawn_moves::is_pawn_move;
use crate::moves::path::squares_between;
use crate::moves::queen_moves::queen_reaches;
use crate::moves::rook_moves::rook_reaches;
use crate::utils::render_game_state::render_position;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Emit per-move traces (relocations, checks, board dumps) through `log`.
    pub debug: bool,
}

/// Everything needed to roll the validator back to an earlier point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorState {
    pub position: PositionSnapshot,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
}

#[derive(Debug, Clone)]
pub struct MoveValidator {
    position: Position,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    config: ValidatorConfig,
}

impl Default for MoveValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveValidator {
    /// Validator over the standard starting position.
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            position: Position::new_game(),
            castling_rights: CastlingRights::ALL,
            en_passant_target: None,
            config,
        }
    }

    /// Validator over an arbitrary arrangement. All castling rights start
    /// held; castling still requires king and rook on their home squares.
    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            castling_rights: CastlingRights::ALL,
            en_passant_target: None,
            config: ValidatorConfig::default(),
        }
    }

    /// Back to the starting arrangement with every right restored.
    pub fn reset(&mut self) {
        self.position.reset_to_starting_position();
        self.castling_rights = CastlingRights::ALL;
        self.en_passant_target = None;
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }

    #[inline]
    pub fn config(&self) -> ValidatorConfig {
        self.config
    }

    pub fn set_config(&mut self, config: ValidatorConfig) {
        self.config = config;
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.piece_at(square)
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling_rights = rights;
    }

    #[inline]
    pub fn can_castle_kingside(&self, color: Color) -> bool {
        self.castling_rights.kingside(color)
    }

    #[inline]
    pub fn can_castle_queenside(&self, color: Color) -> bool {
        self.castling_rights.queenside(color)
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
    }

    pub fn clear_en_passant_target(&mut self) {
        self.en_passant_target = None;
    }

    pub fn save_state(&self) -> ValidatorState {
        ValidatorState {
            position: self.position.snapshot(),
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
        }
    }

    pub fn restore_state(&mut self, state: &ValidatorState) {
        self.position.restore(&state.position);
        self.castling_rights = state.castling_rights;
        self.en_passant_target = state.en_passant_target;
    }

    #[inline]
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        is_square_attacked(&self.position, square, by_color)
    }

    #[inline]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.position, color)
    }

    pub fn is_valid_move(&self, from: Square, to: Square, color: Color) -> bool {
        self.rejection_reason(from, to, color).is_none()
    }

    /// Why `from -> to` is illegal for `color`, or `None` when it is legal.
    pub fn rejection_reason(&self, from: Square, to: Square, color: Color) -> Option<MoveRejection> {
        if from == to {
            return Some(MoveRejection::NullMove);
        }
        let Some(piece) = self.position.piece_at(from) else {
            return Some(MoveRejection::NoPiece);
        };
        if piece.color != color {
            return Some(MoveRejection::WrongColor);
        }
        let target = self.position.piece_at(to);
        if target.is_some_and(|t| t.color == color) {
            return Some(MoveRejection::OwnPieceOnTarget);
        }

        let occupancy = self.position.occupancy_all();
        let shape_ok = match piece.kind {
            PieceKind::Pawn => {
                is_pawn_move(&self.position, from, to, color, self.en_passant_target)
            }
            PieceKind::Rook => rook_reaches(occupancy, from, to),
            PieceKind::Knight => is_knight_shape(from, to),
            PieceKind::Bishop => bishop_reaches(occupancy, from, to),
            PieceKind::Queen => queen_reaches(occupancy, from, to),
            PieceKind::King => is_king_step(from, to) || self.is_castling_move(from, to, color),
        };
        if !shape_ok {
            return Some(MoveRejection::IllegalShape);
        }

        // The castling chain already proved the king safe on every square
        // it touches.
        if piece.kind == PieceKind::King && is_castling_shape(from, to) {
            return None;
        }

        if self.leaves_king_in_check(piece, from, to, target, color) {
            return Some(MoveRejection::LeavesKingInCheck);
        }
        None
    }

    /// The full castling precondition chain for a king moving `from -> to`.
    pub fn is_castling_move(&self, from: Square, to: Square, color: Color) -> bool {
        let home_row = back_rank(color);
        if !is_castling_shape(from, to) || from.row() != home_row || from.col() != KING_HOME_COL {
            return false;
        }
        if self.position.piece_at(from) != Some(Piece::new(color, PieceKind::King)) {
            return false;
        }

        let kingside = to.col() == KINGSIDE_KING_TARGET_COL;
        let has_right = if kingside {
            self.castling_rights.kingside(color)
        } else {
            self.castling_rights.queenside(color)
        };
        if !has_right {
            return false;
        }

        let rook_col = if kingside {
            KINGSIDE_ROOK_COL
        } else {
            QUEENSIDE_ROOK_COL
        };
        let Ok(rook_square) = Square::new(home_row, rook_col) else {
            return false;
        };
        if self.position.piece_at(rook_square) != Some(Piece::new(color, PieceKind::Rook)) {
            return false;
        }
        if squares_between(from, rook_square) & self.position.occupancy_all() != 0 {
            return false;
        }

        let enemy = color.opposite();
        if self.is_square_attacked(from, enemy) {
            return false;
        }
        let step = if kingside { 1 } else { -1 };
        let mut transit = from.offset(0, step);
        while let Some(square) = transit {
            if self.is_square_attacked(square, enemy) {
                return false;
            }
            if square == to {
                break;
            }
            transit = square.offset(0, step);
        }
        true
    }

    /// Apply `mv` for `color` if it is legal and fill in its result flags.
    ///
    /// On error nothing is changed.
    pub fn execute_move(&mut self, mv: &mut Move, color: Color) -> ChessResult<()> {
        if let Some(reason) = self.rejection_reason(mv.from, mv.to, color) {
            return Err(ChessError::IllegalMove {
                from: mv.from,
                to: mv.to,
                reason,
            });
        }
        if let Some(kind) = mv.promoted_to {
            if !is_promotion_kind(kind) {
                return Err(ChessError::InvalidPromotion(kind));
            }
        }
        let Some(piece) = self.position.piece_at(mv.from) else {
            return Err(ChessError::IllegalMove {
                from: mv.from,
                to: mv.to,
                reason: MoveRejection::NoPiece,
            });
        };
        let target = self.position.piece_at(mv.to);

        mv.captured = target.map(|t| t.kind);
        mv.en_passant = false;
        mv.castling = false;

        if piece.kind == PieceKind::King && is_castling_shape(mv.from, mv.to) {
            self.execute_castle(mv, color)?;
            mv.castling = true;
            mv.promoted_to = None;
            self.trace_move(piece, mv, color);
            return Ok(());
        }

        if piece.kind == PieceKind::Pawn && mv.from.col() != mv.to.col() && target.is_none() {
            let captured_square = Square::new(mv.from.row(), mv.to.col())?;
            self.position.clear_square(captured_square);
            mv.en_passant = true;
            mv.captured = Some(PieceKind::Pawn);
        }

        self.position.move_piece(mv.from, mv.to);

        self.revoke_castling_rights(piece, mv.from);
        if let Some(captured) = target {
            self.revoke_castling_rights(captured, mv.to);
        }

        if piece.kind == PieceKind::Pawn && mv.to.row() == promotion_row(color) {
            let kind = mv.promoted_to.unwrap_or(PieceKind::Queen);
            self.position.set_piece(mv.to, Piece::new(color, kind));
            mv.promoted_to = Some(kind);
        } else {
            mv.promoted_to = None;
        }

        self.en_passant_target =
            if piece.kind == PieceKind::Pawn && (mv.to.row() - mv.from.row()).abs() == 2 {
                mv.from.offset(color.pawn_direction(), 0)
            } else {
                None
            };

        self.trace_move(piece, mv, color);
        Ok(())
    }

    fn execute_castle(&mut self, mv: &Move, color: Color) -> ChessResult<()> {
        let row = mv.from.row();
        let (rook_from, rook_to) = if mv.to.col() == KINGSIDE_KING_TARGET_COL {
            (KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TARGET_COL)
        } else {
            (QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TARGET_COL)
        };
        let rook_from = Square::new(row, rook_from)?;
        let rook_to = Square::new(row, rook_to)?;

        self.position.move_piece(mv.from, mv.to);
        self.position.move_piece(rook_from, rook_to);
        self.castling_rights.revoke_all(color);
        self.en_passant_target = None;
        Ok(())
    }

    /// Drop rights tied to a king or a rook on its home corner when that
    /// piece leaves `square` or is captured there.
    fn revoke_castling_rights(&mut self, piece: Piece, square: Square) {
        match piece.kind {
            PieceKind::King => self.castling_rights.revoke_all(piece.color),
            PieceKind::Rook if square.row() == back_rank(piece.color) => {
                if square.col() == KINGSIDE_ROOK_COL {
                    self.castling_rights.revoke_kingside(piece.color);
                } else if square.col() == QUEENSIDE_ROOK_COL {
                    self.castling_rights.revoke_queenside(piece.color);
                }
            }
            _ => {}
        }
    }

    /// Apply the move's bitboard changes to a scratch copy and test the
    /// mover's king there.
    fn leaves_king_in_check(
        &self,
        piece: Piece,
        from: Square,
        to: Square,
        target: Option<Piece>,
        color: Color,
    ) -> bool {
        let mut scratch = self.position.clone();

        scratch.apply_mask_delta(color, piece.kind, from.mask(), to.mask());
        if let Some(captured) = target {
            scratch.apply_mask_delta(captured.color, captured.kind, to.mask(), 0);
        } else if piece.kind == PieceKind::Pawn
            && from.col() != to.col()
            && self.en_passant_target == Some(to)
        {
            if let Ok(passed_pawn) = Square::new(from.row(), to.col()) {
                scratch.apply_mask_delta(color.opposite(), PieceKind::Pawn, passed_pawn.mask(), 0);
            }
        }

        is_king_in_check(&scratch, color)
    }

    fn trace_move(&self, piece: Piece, mv: &Move, color: Color) {
        if !self.config.debug {
            return;
        }
        log::debug!("{}{}-{} {}", piece.kind.letter(), mv.from, mv.to, mv.describe());
        if self.is_king_in_check(color.opposite()) {
            log::info!("Check!");
        }
        log::trace!("\n{}", render_position(&self.position));
    }
}
