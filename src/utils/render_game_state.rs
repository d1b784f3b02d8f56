//! Terminal board renderers for logs, the binary, and test failure output.
//!
//! Row 0 (rank 8) is printed first so White sits at the bottom.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;

/// ASCII board: uppercase White, lowercase Black, `.` for empty squares.
pub fn render_position(position: &Position) -> String {
    render_with(position, Piece::to_char, '.')
}

/// Same layout as `render_position` with Unicode chess glyphs.
pub fn render_position_unicode(position: &Position) -> String {
    render_with(position, piece_to_unicode, '·')
}

fn render_with(position: &Position, glyph: impl Fn(Piece) -> char, empty: char) -> String {
    let mut out = String::with_capacity(200);
    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            let square = Square::from_index(row * 8 + col);
            match position.piece_at(square) {
                Some(piece) => out.push(glyph(piece)),
                None => out.push(empty),
            }
            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
