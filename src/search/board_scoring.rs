//! Static position evaluation.
//!
//! Search delegates leaf scoring to `BoardScorer` so alternate heuristics can
//! be swapped without touching the tree walk. Scores are always from White's
//! point of view: positive favours White, negative favours Black.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;

pub trait BoardScorer: Send + Sync {
    fn score(&self, position: &Position) -> i32;
}

/// Signed material count. Kings are never counted.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 0,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, position: &Position) -> i32 {
        let mut score = 0i32;
        for kind in PieceKind::ALL {
            let value = Self::piece_value(kind);
            let white_count = position.bitboard(Color::White, kind).count_ones() as i32;
            let black_count = position.bitboard(Color::Black, kind).count_ones() as i32;
            score += (white_count - black_count) * value;
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardScorer, MaterialScorer};
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(MaterialScorer.score(&Position::new_game()), 0);
    }

    #[test]
    fn missing_black_queen_favours_white() {
        let mut position = Position::new_game();
        position.clear_square(Square::from_algebraic("d8").expect("d8 should parse"));
        assert_eq!(MaterialScorer.score(&position), 900);
    }

    #[test]
    fn kings_contribute_nothing() {
        let mut position = Position::new_empty();
        position.set_piece(
            Square::from_algebraic("e1").expect("e1 should parse"),
            Piece::new(Color::White, PieceKind::King),
        );
        position.set_piece(
            Square::from_algebraic("e8").expect("e8 should parse"),
            Piece::new(Color::Black, PieceKind::King),
        );
        position.set_piece(
            Square::from_algebraic("a5").expect("a5 should parse"),
            Piece::new(Color::Black, PieceKind::Knight),
        );
        assert_eq!(MaterialScorer.score(&position), -300);
    }
}
