//! Rule scenarios played through the public validator API.

use bitboard_chess::errors::{ChessError, MoveRejection};
use bitboard_chess::game_state::chess_types::*;
use bitboard_chess::game_state::position::Position;
use bitboard_chess::move_generation::move_validator::MoveValidator;

fn sq(text: &str) -> Square {
    Square::from_algebraic(text).expect("test square should parse")
}

fn play(validator: &mut MoveValidator, from: &str, to: &str, color: Color) -> Move {
    let mut mv = Move::new(sq(from), sq(to));
    validator
        .execute_move(&mut mv, color)
        .unwrap_or_else(|err| panic!("{from}{to} should be legal: {err}"));
    assert!(validator.position().is_consistent());
    mv
}

fn play_line(validator: &mut MoveValidator, line: &[(&str, &str)]) -> Color {
    let mut color = Color::White;
    for &(from, to) in line {
        play(validator, from, to, color);
        color = color.opposite();
    }
    color
}

#[test]
fn fools_mate() {
    let mut validator = MoveValidator::new();
    let to_move = play_line(
        &mut validator,
        &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
    );

    assert_eq!(to_move, Color::White);
    assert!(validator.is_king_in_check(Color::White));
    assert!(validator.is_checkmate(Color::White));
    assert!(validator.legal_moves(Color::White).is_empty());
}

#[test]
fn scholars_mate_records_the_capture() {
    let mut validator = MoveValidator::new();
    play_line(
        &mut validator,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("f1", "c4"),
            ("b8", "c6"),
            ("d1", "h5"),
            ("g8", "f6"),
        ],
    );
    let mate = play(&mut validator, "h5", "f7", Color::White);

    assert_eq!(mate.captured, Some(PieceKind::Pawn));
    assert!(validator.is_checkmate(Color::Black));
}

#[test]
fn en_passant_window_closes_after_one_ply() {
    let opening = [("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")];

    let mut validator = MoveValidator::new();
    play_line(&mut validator, &opening);
    assert_eq!(validator.en_passant_target(), Some(sq("d6")));
    let capture = play(&mut validator, "e5", "d6", Color::White);
    assert!(capture.en_passant);
    assert_eq!(capture.captured, Some(PieceKind::Pawn));
    assert!(validator.position().is_empty(sq("d5")));

    let mut validator = MoveValidator::new();
    play_line(&mut validator, &opening);
    play(&mut validator, "h2", "h3", Color::White);
    play(&mut validator, "h7", "h6", Color::Black);
    assert_eq!(validator.en_passant_target(), None);
    assert!(!validator.is_valid_move(sq("e5"), sq("d6"), Color::White));
}

#[test]
fn rook_leaving_and_returning_loses_the_right() {
    let mut position = Position::new_empty();
    position.set_piece(sq("e1"), Piece::new(Color::White, PieceKind::King));
    position.set_piece(sq("h1"), Piece::new(Color::White, PieceKind::Rook));
    position.set_piece(sq("a1"), Piece::new(Color::White, PieceKind::Rook));
    position.set_piece(sq("e8"), Piece::new(Color::Black, PieceKind::King));
    let mut validator = MoveValidator::from_position(position);

    play_line(
        &mut validator,
        &[("h1", "h2"), ("e8", "d8"), ("h2", "h1"), ("d8", "e8")],
    );

    assert!(!validator.can_castle_kingside(Color::White));
    assert!(validator.can_castle_queenside(Color::White));
    assert!(!validator.is_valid_move(sq("e1"), sq("g1"), Color::White));

    let castle = play(&mut validator, "e1", "c1", Color::White);
    assert!(castle.castling);
    assert_eq!(
        validator.piece_at(sq("d1")),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert!(!validator.can_castle_queenside(Color::White));
}

#[test]
fn kingside_castle_after_development() {
    let mut validator = MoveValidator::new();
    play_line(
        &mut validator,
        &[("g1", "f3"), ("g8", "f6"), ("e2", "e3"), ("e7", "e6"), ("f1", "e2"), ("f8", "e7")],
    );
    let castle = play(&mut validator, "e1", "g1", Color::White);

    assert!(castle.castling);
    assert_eq!(castle.describe(), "e1g1 (castle)");
    assert_eq!(
        validator.piece_at(sq("g1")),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        validator.piece_at(sq("f1")),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert!(validator.is_valid_move(sq("e8"), sq("g8"), Color::Black));
}

#[test]
fn rejected_move_reports_reason_and_changes_nothing() {
    let mut validator = MoveValidator::new();
    let before = validator.save_state();

    let mut mv = Move::new(sq("e2"), sq("e5"));
    let err = validator
        .execute_move(&mut mv, Color::White)
        .expect_err("triple pawn push should be rejected");

    assert_eq!(
        err,
        ChessError::IllegalMove {
            from: sq("e2"),
            to: sq("e5"),
            reason: MoveRejection::IllegalShape,
        }
    );
    assert_eq!(validator.save_state(), before);

    let mut wrong_side = Move::new(sq("e7"), sq("e5"));
    assert!(validator.execute_move(&mut wrong_side, Color::White).is_err());
    assert_eq!(validator.save_state(), before);
}

#[test]
fn snapshot_restores_after_a_line() {
    let mut validator = MoveValidator::new();
    let snapshot = validator.position().snapshot();
    play_line(&mut validator, &[("d2", "d4"), ("d7", "d5"), ("c1", "g5")]);
    assert_ne!(validator.position(), &Position::new_game());

    validator.position_mut().restore(&snapshot);
    assert_eq!(validator.position(), &Position::new_game());
}

#[test]
fn pinned_knight_cannot_move() {
    let mut validator = MoveValidator::new();
    play_line(&mut validator, &[("d2", "d4"), ("e7", "e6"), ("b1", "c3"), ("f8", "b4")]);

    assert!(!validator.is_king_in_check(Color::White));
    assert!(validator.valid_moves_for(sq("c3"), Color::White).is_empty());
    assert!(validator.is_valid_move(sq("c1"), sq("d2"), Color::White));
    assert!(validator.is_valid_move(sq("a2"), sq("a3"), Color::White));
}
