//! Pawn movement shapes.
//!
//! Pawns are the only piece whose reach depends on color, on occupancy of
//! the destination, and on the previous move (en passant), so their shape
//! test takes the position and the current en-passant target.

use crate::game_state::chess_rules::pawn_home_row;
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);

/// Squares a pawn of `color` on `square` attacks (one row forward, one
/// column to either side).
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square.index() as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square.index() as usize],
    }
}

/// Pseudo-legal pawn move: single push to an empty square, double push from
/// the home row through two empty squares, diagonal capture of an occupied
/// square, or diagonal step onto the en-passant target.
pub fn is_pawn_move(
    position: &Position,
    from: Square,
    to: Square,
    color: Color,
    en_passant_target: Option<Square>,
) -> bool {
    let direction = color.pawn_direction();
    let d_row = to.row() - from.row();
    let d_col = to.col() - from.col();

    if d_col == 0 {
        if d_row == direction {
            return position.is_empty(to);
        }
        if d_row == 2 * direction && from.row() == pawn_home_row(color) {
            return match from.offset(direction, 0) {
                Some(middle) => position.is_empty(middle) && position.is_empty(to),
                None => false,
            };
        }
        return false;
    }

    if pawn_attacks(color, from) & to.mask() == 0 {
        return false;
    }
    !position.is_empty(to) || en_passant_target == Some(to)
}

const fn generate_pawn_attacks(row_step: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32 + row_step;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;

        if row >= 0 && row < 8 {
            if col > 0 {
                attacks |= 1u64 << (row * 8 + col - 1);
            }
            if col < 7 {
                attacks |= 1u64 << (row * 8 + col + 1);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
