//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type returned by fallible operations in
//! the crate. Rules queries (`is_valid_move`, `is_king_in_check`, ...) stay
//! plain booleans; only operations that would mutate state or parse input
//! report failures through this type.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};

pub type ChessResult<T> = Result<T, ChessError>;

/// Why a requested move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// Source and destination are the same square.
    NullMove,
    /// No piece stands on the source square.
    NoPiece,
    /// The piece on the source square belongs to the other side.
    WrongColor,
    /// The destination holds a piece of the mover's own color.
    OwnPieceOnTarget,
    /// The piece cannot reach the destination (shape, blocked path, or
    /// failed castling precondition).
    IllegalShape,
    /// The move would leave the mover's king attacked.
    LeavesKingInCheck,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MoveRejection::NullMove => "source and destination are the same square",
            MoveRejection::NoPiece => "no piece on source square",
            MoveRejection::WrongColor => "piece belongs to the opponent",
            MoveRejection::OwnPieceOnTarget => "destination occupied by own piece",
            MoveRejection::IllegalShape => "piece cannot move that way",
            MoveRejection::LeavesKingInCheck => "move leaves own king in check",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("square out of bounds: row {row}, col {col}")]
    SquareOutOfBounds { row: i32, col: i32 },

    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    #[error("illegal move {from}{to}: {reason}")]
    IllegalMove {
        from: Square,
        to: Square,
        reason: MoveRejection,
    },

    #[error("cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),

    #[error("engine returned an illegal move: {0}")]
    EngineReturnedIllegalMove(String),
}
