//! Agent abstraction shared by the match harness and the binary.
//!
//! An agent borrows the live validator for the duration of its turn. It may
//! play moves on it while thinking but must hand it back in the state it
//! received it.

use crate::game_state::chess_types::{Color, Move};
use crate::move_generation::move_validator::MoveValidator;

pub trait ChessAgent: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for `color`, or `Move::NONE` when none is legal.
    fn choose_move(&mut self, validator: &mut MoveValidator, color: Color) -> Move;
}
