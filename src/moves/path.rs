//! Line geometry shared by the sliding pieces.

use crate::game_state::chess_types::Square;

/// Squares strictly between `from` and `to` when they share a row, column,
/// or diagonal; zero otherwise (including adjacent squares).
pub fn squares_between(from: Square, to: Square) -> u64 {
    let d_row = to.row() - from.row();
    let d_col = to.col() - from.col();
    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    if !aligned || (d_row == 0 && d_col == 0) {
        return 0;
    }

    let step_row = d_row.signum();
    let step_col = d_col.signum();
    let mut between = 0u64;
    let mut current = from.offset(step_row, step_col);
    while let Some(square) = current {
        if square == to {
            break;
        }
        between |= square.mask();
        current = square.offset(step_row, step_col);
    }
    between
}

/// True when nothing in `occupancy` stands between `from` and `to`.
#[inline]
pub fn is_path_clear(occupancy: u64, from: Square, to: Square) -> bool {
    squares_between(from, to) & occupancy == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        Square::from_algebraic(text).expect("test square should parse")
    }

    #[test]
    fn between_on_file_rank_and_diagonal() {
        assert_eq!(squares_between(sq("a1"), sq("a4")), sq("a2").mask() | sq("a3").mask());
        assert_eq!(squares_between(sq("h1"), sq("e1")), sq("g1").mask() | sq("f1").mask());
        assert_eq!(squares_between(sq("c1"), sq("f4")), sq("d2").mask() | sq("e3").mask());
    }

    #[test]
    fn unaligned_or_adjacent_squares_have_nothing_between() {
        assert_eq!(squares_between(sq("a1"), sq("b3")), 0);
        assert_eq!(squares_between(sq("e4"), sq("e5")), 0);
        assert_eq!(squares_between(sq("e4"), sq("e4")), 0);
    }

    #[test]
    fn path_clear_ignores_endpoints() {
        let occupancy = sq("a1").mask() | sq("a4").mask();
        assert!(is_path_clear(occupancy, sq("a1"), sq("a4")));
        assert!(!is_path_clear(occupancy | sq("a2").mask(), sq("a1"), sq("a4")));
    }
}
