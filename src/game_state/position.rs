//! Bit-packed board state.
//!
//! `Position` stores one bitboard per (color, piece kind) pair plus three
//! occupancy caches. Every mutating method recomputes the caches before it
//! returns, so readers can always rely on
//! `occupancy_all == occupancy_white | occupancy_black`.
//!
//! The store performs no legality checks; the move validator decides what is
//! allowed and calls into these primitives afterwards.

use crate::game_state::chess_rules::{back_rank, pawn_home_row};
use crate::game_state::chess_types::*;

/// Back-rank arrangement from the a-file to the h-file.
const BACK_RANK_KINDS: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    // [color][piece_kind]
    pieces: [[u64; 6]; 2],
    occupancy_by_color: [u64; 2],
    occupancy_all: u64,
}

/// Opaque copy of every bitboard in a `Position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionSnapshot {
    pieces: [[u64; 6]; 2],
    occupancy_by_color: [u64; 2],
    occupancy_all: u64,
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Position {
    /// A board with no pieces on it.
    pub fn new_empty() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,
        }
    }

    /// The standard starting arrangement.
    pub fn new_game() -> Self {
        let mut position = Self::new_empty();
        position.reset_to_starting_position();
        position
    }

    pub fn reset_to_starting_position(&mut self) {
        self.pieces = [[0; 6]; 2];

        for color in Color::BOTH {
            let pawn_row = pawn_home_row(color) as u8;
            let piece_row = back_rank(color) as u8;
            for col in 0u8..8 {
                let pawn_sq = Square::from_index(pawn_row * 8 + col);
                let piece_sq = Square::from_index(piece_row * 8 + col);
                self.pieces[color.index()][PieceKind::Pawn.index()] |= pawn_sq.mask();
                self.pieces[color.index()][BACK_RANK_KINDS[col as usize].index()] |=
                    piece_sq.mask();
            }
        }

        self.recalc_occupancy();
    }

    /// Piece on `square`, scanning kinds in pawn, rook, knight, bishop,
    /// queen, king order with White before Black for each kind.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let mask = square.mask();
        if self.occupancy_all & mask == 0 {
            return None;
        }
        for kind in PieceKind::ALL {
            for color in Color::BOTH {
                if self.pieces[color.index()][kind.index()] & mask != 0 {
                    return Some(Piece::new(color, kind));
                }
            }
        }
        None
    }

    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        self.clear_bit_everywhere(square.mask());
        self.pieces[piece.color.index()][piece.kind.index()] |= square.mask();
        self.recalc_occupancy();
    }

    pub fn clear_square(&mut self, square: Square) {
        self.clear_bit_everywhere(square.mask());
        self.recalc_occupancy();
    }

    /// Relocate whatever stands on `from` to `to`, overwriting any piece on
    /// `to`. Returns the relocated piece, or `None` (and no change) when
    /// `from` is empty.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.piece_at(from)?;
        self.clear_bit_everywhere(from.mask() | to.mask());
        self.pieces[piece.color.index()][piece.kind.index()] |= to.mask();
        self.recalc_occupancy();
        Some(piece)
    }

    pub fn snapshot(&self) -> PositionSnapshot {
        PositionSnapshot {
            pieces: self.pieces,
            occupancy_by_color: self.occupancy_by_color,
            occupancy_all: self.occupancy_all,
        }
    }

    pub fn restore(&mut self, snapshot: &PositionSnapshot) {
        self.pieces = snapshot.pieces;
        self.occupancy_by_color = snapshot.occupancy_by_color;
        self.occupancy_all = snapshot.occupancy_all;
    }

    #[inline]
    pub fn bitboard(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupancy_all(&self) -> u64 {
        self.occupancy_all
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.occupancy_all & square.mask() == 0
    }

    /// Color of the piece on `square`, if any.
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        let mask = square.mask();
        if self.occupancy_by_color[Color::White.index()] & mask != 0 {
            Some(Color::White)
        } else if self.occupancy_by_color[Color::Black.index()] & mask != 0 {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// Squares holding a piece of `color`, in ascending index order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> {
        let mut bits = self.occupancy(color);
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let square = Square::from_index(bits.trailing_zeros() as u8);
            bits &= bits - 1;
            Some(square)
        })
    }

    /// True when the occupancy caches agree with the piece bitboards and no
    /// square is claimed twice.
    pub fn is_consistent(&self) -> bool {
        let mut seen = 0u64;
        let mut by_color = [0u64; 2];
        for color in Color::BOTH {
            for kind in PieceKind::ALL {
                let bb = self.pieces[color.index()][kind.index()];
                if seen & bb != 0 {
                    return false;
                }
                seen |= bb;
                by_color[color.index()] |= bb;
            }
        }
        by_color == self.occupancy_by_color
            && self.occupancy_all == (by_color[0] | by_color[1])
            && by_color[0] & by_color[1] == 0
    }

    /// Toggle raw bits on one bitboard and refresh the caches. Used by the
    /// validator's check simulation on a scratch copy.
    pub(crate) fn apply_mask_delta(&mut self, color: Color, kind: PieceKind, clear: u64, set: u64) {
        let bb = &mut self.pieces[color.index()][kind.index()];
        *bb = (*bb & !clear) | set;
        self.recalc_occupancy();
    }

    #[inline]
    fn clear_bit_everywhere(&mut self, mask: u64) {
        for side in self.pieces.iter_mut() {
            for bb in side.iter_mut() {
                *bb &= !mask;
            }
        }
    }

    fn recalc_occupancy(&mut self) {
        for color in Color::BOTH {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .copied()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[Color::White.index()]
            | self.occupancy_by_color[Color::Black.index()];
    }
}
