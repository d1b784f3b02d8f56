//! Core value types shared by the position store, rules engine, and agents.
//!
//! Squares use row-major indexing with row 0 on rank 8 and column 0 on the
//! a-file, so `a8 == 0`, `h8 == 7`, `a1 == 56`, and `h1 == 63`.

use std::fmt;

use crate::errors::{ChessError, ChessResult};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Side identifier. `White` is index 0 and `Black` is index 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step for this side.
    #[inline]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

/// Piece kind in the fixed scan order used by square lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Rook => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A colored piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Board letter, uppercase for White and lowercase for Black.
    pub fn to_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

/// A board square. Always within `0..8 x 0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i32, col: i32) -> ChessResult<Self> {
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return Err(ChessError::SquareOutOfBounds { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Build a square from a linear index; only the low six bits are used.
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        Self {
            row: (index & 63) / 8,
            col: (index & 63) % 8,
        }
    }

    #[inline]
    pub const fn row(self) -> i32 {
        self.row as i32
    }

    #[inline]
    pub const fn col(self) -> i32 {
        self.col as i32
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.row * 8 + self.col
    }

    #[inline]
    pub const fn mask(self) -> u64 {
        1u64 << self.index()
    }

    /// The square shifted by `(d_row, d_col)`, if still on the board.
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Self::new(self.row() + d_row, self.col() + d_col).ok()
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square::from_index)
    }

    pub fn from_algebraic(text: &str) -> ChessResult<Self> {
        algebraic_to_square(text)
    }

    pub fn to_algebraic(self) -> String {
        square_to_algebraic(self)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}

/// Castling availability, revoked monotonically during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    pub const fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    pub const fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    pub fn revoke_kingside(&mut self, color: Color) {
        match color {
            Color::White => self.white_kingside = false,
            Color::Black => self.black_kingside = false,
        }
    }

    pub fn revoke_queenside(&mut self, color: Color) {
        match color {
            Color::White => self.white_queenside = false,
            Color::Black => self.black_queenside = false,
        }
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.revoke_kingside(color);
        self.revoke_queenside(color);
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}

/// A move request that doubles as the record of what execution did.
///
/// Only `from`, `to`, and optionally `promoted_to` are read by execution;
/// the remaining fields are filled in once the move has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    pub en_passant: bool,
    pub castling: bool,
    pub promoted_to: Option<PieceKind>,
}

impl Move {
    /// Sentinel returned by agents when no legal move exists. Executing it
    /// is always rejected.
    pub const NONE: Move = Move::new(Square::from_index(0), Square::from_index(0));

    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: None,
            en_passant: false,
            castling: false,
            promoted_to: None,
        }
    }

    pub fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promoted_to = Some(kind);
        self
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.from == self.to
    }

    /// Same request: squares and promotion choice match.
    pub fn same_request(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to && self.promoted_to == other.promoted_to
    }

    /// Coordinate text with result annotations, e.g. `e1g1 (castle)`.
    pub fn describe(&self) -> String {
        let mut out = format!("{}{}", self.from, self.to);
        if let Some(kind) = self.captured {
            out.push_str(" x");
            out.push(kind.letter());
        }
        if self.castling {
            out.push_str(" (castle)");
        }
        if self.en_passant {
            out.push_str(" (en passant)");
        }
        if let Some(kind) = self.promoted_to {
            out.push_str(&format!(" (promotion={})", kind.letter()));
        }
        out
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promoted_to {
            write!(f, "{}", kind.letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}
