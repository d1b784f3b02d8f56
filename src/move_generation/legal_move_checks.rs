//! Attack and check detection.
//!
//! These functions only ask whether a piece can *reach* a square by its
//! movement shape and a clear path. They never consult full move legality,
//! so they can be called from inside the validator's check simulation
//! without recursing back into it.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::bishop_moves::bishop_reaches;
use crate::moves::king_moves::is_king_step;
use crate::moves::knight_moves::is_knight_shape;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_reaches;
use crate::moves::rook_moves::rook_reaches;

/// Square of `color`'s king, from the lowest set bit of its bitboard.
#[inline]
pub fn king_square(position: &Position, color: Color) -> Option<Square> {
    let kings = position.bitboard(color, PieceKind::King);
    if kings == 0 {
        None
    } else {
        Some(Square::from_index(kings.trailing_zeros() as u8))
    }
}

/// Whether `color`'s king stands on a square attacked by the other side.
///
/// A board without that king reports "not in check".
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    let Some(king_sq) = king_square(position, color) else {
        debug_assert!(false, "{} king missing from the board", color.name());
        return false;
    };
    is_square_attacked(position, king_sq, color.opposite())
}

/// Whether any piece of `attacker_color` can reach `square`.
///
/// Pawns count only through their diagonal capture squares; pushes and
/// en passant never attack.
pub fn is_square_attacked(position: &Position, square: Square, attacker_color: Color) -> bool {
    // A square holding the attacker's own piece cannot be captured by it.
    if position.color_at(square) == Some(attacker_color) {
        return false;
    }

    let occupancy = position.occupancy_all();
    for from in position.squares_of(attacker_color) {
        if from == square {
            continue;
        }
        let Some(piece) = position.piece_at(from) else {
            continue;
        };
        if piece_attacks(piece, occupancy, from, square) {
            return true;
        }
    }
    false
}

/// Every `(square, kind)` of `attacker_color` that reaches `square`.
pub fn attackers_to_square(
    position: &Position,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceKind)> {
    let occupancy = position.occupancy_all();
    position
        .squares_of(attacker_color)
        .filter(|&from| from != square)
        .filter_map(|from| position.piece_at(from).map(|piece| (from, piece)))
        .filter(|&(from, piece)| piece_attacks(piece, occupancy, from, square))
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}

#[inline]
fn piece_attacks(piece: Piece, occupancy: u64, from: Square, to: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from) & to.mask() != 0,
        PieceKind::Rook => rook_reaches(occupancy, from, to),
        PieceKind::Knight => is_knight_shape(from, to),
        PieceKind::Bishop => bishop_reaches(occupancy, from, to),
        PieceKind::Queen => queen_reaches(occupancy, from, to),
        PieceKind::King => is_king_step(from, to),
    }
}
