//! Board geometry and rule constants.

use crate::game_state::chess_types::{Color, PieceKind};

/// Column the king starts on (the e-file).
pub const KING_HOME_COL: i32 = 4;
pub const KINGSIDE_ROOK_COL: i32 = 7;
pub const QUEENSIDE_ROOK_COL: i32 = 0;
/// Destination columns of the king and rook after castling.
pub const KINGSIDE_KING_TARGET_COL: i32 = 6;
pub const KINGSIDE_ROOK_TARGET_COL: i32 = 5;
pub const QUEENSIDE_KING_TARGET_COL: i32 = 2;
pub const QUEENSIDE_ROOK_TARGET_COL: i32 = 3;

/// Promotion choices in enumeration order.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Halfmoves without a pawn move or capture after which the game is drawn.
pub const SEVENTY_FIVE_MOVE_HALFMOVES: u32 = 150;

/// Row of a side's pieces in the starting arrangement.
#[inline]
pub const fn back_rank(color: Color) -> i32 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Row a side's pawns start on.
#[inline]
pub const fn pawn_home_row(color: Color) -> i32 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row on which a side's pawns promote.
#[inline]
pub const fn promotion_row(color: Color) -> i32 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// Kinds a pawn may legally become.
#[inline]
pub fn is_promotion_kind(kind: PieceKind) -> bool {
    PROMOTION_KINDS.contains(&kind)
}
