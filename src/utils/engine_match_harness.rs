//! Headless agent-vs-agent game loop.
//!
//! Runs two `ChessAgent`s against each other on a single `MoveValidator`
//! and adjudicates the game: checkmate, stalemate, bare kings, the 75-move
//! rule, and a ply cap for runaway games.

use std::time::Instant;

use crate::engines::engine_trait::ChessAgent;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::SEVENTY_FIVE_MOVE_HALFMOVES;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::move_validator::{MoveValidator, ValidatorConfig};
use crate::search::minimax::{SearchConfig, DEFAULT_MAX_DEPTH};
use crate::utils::render_game_state::render_position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawInsufficientMaterial,
    DrawSeventyFiveMoveRule,
    DrawMaxPlies,
}

impl MatchOutcome {
    pub fn is_draw(self) -> bool {
        !matches!(
            self,
            MatchOutcome::WhiteWinCheckmate | MatchOutcome::BlackWinCheckmate
        )
    }

    pub fn description(self) -> &'static str {
        match self {
            MatchOutcome::WhiteWinCheckmate => "Checkmate! White wins!",
            MatchOutcome::BlackWinCheckmate => "Checkmate! Black wins!",
            MatchOutcome::DrawStalemate => "Stalemate! It's a draw!",
            MatchOutcome::DrawInsufficientMaterial => "Draw! Only kings left.",
            MatchOutcome::DrawSeventyFiveMoveRule => "Draw by 75-move rule!",
            MatchOutcome::DrawMaxPlies => "Draw! Ply limit reached.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub search_depth: u8,
    /// Seed for random agents; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub debug: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            search_depth: DEFAULT_MAX_DEPTH,
            seed: None,
            debug: false,
        }
    }
}

impl MatchConfig {
    /// Defaults overridden by `CHESS_DEBUG`, `CHESS_MAX_PLIES`,
    /// `CHESS_SEARCH_DEPTH` and `CHESS_SEED`. Unparsable values are ignored.
    pub fn from_env() -> Self {
        let defaults = MatchConfig::default();
        MatchConfig {
            max_plies: env_parse("CHESS_MAX_PLIES").unwrap_or(defaults.max_plies),
            search_depth: env_parse("CHESS_SEARCH_DEPTH").unwrap_or(defaults.search_depth),
            seed: env_parse("CHESS_SEED").or(defaults.seed),
            debug: std::env::var("CHESS_DEBUG")
                .map(|v| matches!(v.trim(), "1" | "true" | "yes" | "on"))
                .unwrap_or(defaults.debug),
        }
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_depth: self.search_depth,
            debug: self.debug,
        }
    }

    pub fn validator_config(&self) -> ValidatorConfig {
        ValidatorConfig { debug: self.debug }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_position: Position,
    /// Coordinate notation with annotations, e.g. `e1g1 (castle)`.
    pub played_moves: Vec<String>,
    pub halfmove_clock: u32,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    pub fn plies(&self) -> usize {
        self.played_moves.len()
    }
}

/// Play a full game from the standard starting position, White first.
pub fn play_match(
    white: &mut dyn ChessAgent,
    black: &mut dyn ChessAgent,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    let validator = MoveValidator::with_config(config.validator_config());
    play_match_from(validator, Color::White, white, black, config)
}

/// Play from a caller-prepared validator with `to_move` on turn.
pub fn play_match_from(
    mut validator: MoveValidator,
    to_move: Color,
    white: &mut dyn ChessAgent,
    black: &mut dyn ChessAgent,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    white.new_game();
    black.new_game();

    let mut mover = to_move;
    let mut halfmove_clock = 0u32;
    let mut played_moves = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    let outcome = loop {
        if let Some(outcome) = adjudicate(&validator, mover, halfmove_clock) {
            break outcome;
        }
        if played_moves.len() >= usize::from(config.max_plies) {
            break MatchOutcome::DrawMaxPlies;
        }

        let agent: &mut dyn ChessAgent = match mover {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };

        let before = validator.save_state();
        let started = Instant::now();
        let mut chosen = agent.choose_move(&mut validator, mover);
        let elapsed_ns = started.elapsed().as_nanos();
        if validator.save_state() != before {
            log::warn!("{} left the board modified; restoring", agent.name());
            validator.restore_state(&before);
        }

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        if chosen.is_none() {
            return Err(ChessError::EngineReturnedIllegalMove(format!(
                "{} ({}) returned no move with legal moves available",
                agent.name(),
                mover.name()
            )));
        }

        let is_pawn_move =
            validator.piece_at(chosen.from).map(|piece| piece.kind) == Some(PieceKind::Pawn);
        if let Err(err) = validator.execute_move(&mut chosen, mover) {
            return Err(ChessError::EngineReturnedIllegalMove(format!(
                "{} ({}): {}",
                agent.name(),
                mover.name(),
                err
            )));
        }

        if is_pawn_move || chosen.captured.is_some() {
            halfmove_clock = 0;
        } else {
            halfmove_clock += 1;
        }

        let text = chosen.describe();
        if config.debug {
            log::info!("{}. {} {}", played_moves.len() + 1, mover.name(), text);
            log::debug!("\n{}", render_position(validator.position()));
        }
        played_moves.push(text);
        mover = mover.opposite();
    };

    if config.debug {
        log::info!("{} after {} plies", outcome.description(), played_moves.len());
    }

    Ok(MatchResult {
        outcome,
        final_position: validator.position().clone(),
        played_moves,
        halfmove_clock,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Result of the game if it is already decided with `mover` on turn.
pub fn adjudicate(
    validator: &MoveValidator,
    mover: Color,
    halfmove_clock: u32,
) -> Option<MatchOutcome> {
    if !validator.has_any_legal_moves(mover) {
        return Some(if validator.is_king_in_check(mover) {
            match mover {
                Color::White => MatchOutcome::BlackWinCheckmate,
                Color::Black => MatchOutcome::WhiteWinCheckmate,
            }
        } else {
            MatchOutcome::DrawStalemate
        });
    }
    if only_kings_left(validator.position()) {
        return Some(MatchOutcome::DrawInsufficientMaterial);
    }
    if halfmove_clock >= SEVENTY_FIVE_MOVE_HALFMOVES {
        return Some(MatchOutcome::DrawSeventyFiveMoveRule);
    }
    None
}

pub fn only_kings_left(position: &Position) -> bool {
    let kings = position.bitboard(Color::White, PieceKind::King)
        | position.bitboard(Color::Black, PieceKind::King);
    position.occupancy_all() & !kings == 0
}
