//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! row/column square representation, where row 0 is rank 8.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }

    let col = i32::from(file - b'a');
    let row = 7 - i32::from(rank - b'1');
    Square::new(row, col)
}

/// Convert a square to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col() as u8);
    let rank_char = char::from(b'8' - square.row() as u8);
    format!("{file_char}{rank_char}")
}

/// Convert a one-hot bitboard to algebraic notation.
pub fn bitboard_to_algebraic(bitboard: u64) -> ChessResult<String> {
    if bitboard.count_ones() != 1 {
        return Err(ChessError::InvalidAlgebraic(format!(
            "bitboard {bitboard:#018x} must contain exactly one set bit"
        )));
    }
    Ok(square_to_algebraic(Square::from_index(
        bitboard.trailing_zeros() as u8,
    )))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, bitboard_to_algebraic, square_to_algebraic};
    use crate::game_state::chess_types::Square;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse").index(), 0);
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse").index(), 63);
        assert_eq!(square_to_algebraic(Square::from_index(0)), "a8");
        assert_eq!(square_to_algebraic(Square::from_index(52)), "e2");
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e").is_err());
        assert!(algebraic_to_square("e44").is_err());
    }

    #[test]
    fn one_hot_bitboard_converts() {
        let e4 = algebraic_to_square("e4").expect("e4 should parse");
        assert_eq!(e4.row(), 4);
        assert_eq!(e4.col(), 4);
        assert_eq!(
            bitboard_to_algebraic(e4.mask()).expect("one-hot bitboard should convert"),
            "e4"
        );
        assert!(bitboard_to_algebraic(0).is_err());
        assert!(bitboard_to_algebraic(0b11).is_err());
    }
}
