//! Iterative-deepening full-width minimax.
//!
//! White maximizes and Black minimizes a White-relative score. Each depth
//! from 1 to `max_depth` re-searches the whole tree from scratch and the
//! final depth's choice wins. Moves are made in place on the validator and
//! undone through `save_state`/`restore_state`, so castling rights and the
//! en passant target are restored along with the pieces.

use crate::game_state::chess_types::*;
use crate::move_generation::move_validator::MoveValidator;
use crate::search::board_scoring::BoardScorer;

/// Base score for a mated side. Remaining depth is added so a faster mate
/// scores further from zero.
pub const MATE_SCORE: i32 = 100_000;
pub const DEFAULT_MAX_DEPTH: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    /// Log per-depth statistics at info level.
    pub debug: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            debug: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthStats {
    pub depth: u8,
    /// Leaf and terminal positions scored during this iteration.
    pub positions: u64,
    pub elapsed_ms: i64,
    pub best_score: i32,
    pub best_move: Move,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// `Move::NONE` when the side to move has no legal moves.
    pub best_move: Move,
    pub best_score: i32,
    pub depths: Vec<DepthStats>,
}

impl SearchReport {
    pub fn reached_depth(&self) -> u8 {
        self.depths.last().map_or(0, |stats| stats.depth)
    }

    pub fn total_positions(&self) -> u64 {
        self.depths.iter().map(|stats| stats.positions).sum()
    }
}

/// Score of a side with no legal moves: mate if in check, otherwise stalemate.
#[inline]
pub fn terminal_score(validator: &MoveValidator, color: Color, depth: u8) -> i32 {
    if !validator.is_king_in_check(color) {
        return 0;
    }
    match color {
        Color::White => -MATE_SCORE - i32::from(depth),
        Color::Black => MATE_SCORE + i32::from(depth),
    }
}

pub fn iterative_deepening_search<S: BoardScorer>(
    validator: &mut MoveValidator,
    color: Color,
    scorer: &S,
    config: SearchConfig,
) -> SearchReport {
    let root_moves = validator.legal_moves_with_promotions(color);
    let Some(&first) = root_moves.first() else {
        if config.debug {
            log::info!("search: {} has no legal moves", color.name());
        }
        return SearchReport {
            best_move: Move::NONE,
            best_score: terminal_score(validator, color, 0),
            depths: Vec::new(),
        };
    };

    let mut report = SearchReport {
        best_move: first,
        best_score: scorer.score(validator.position()),
        depths: Vec::with_capacity(config.max_depth as usize),
    };

    for depth in 1..=config.max_depth.max(1) {
        let started = chrono::Utc::now();
        let mut positions = 0u64;
        let (best_move, best_score) =
            search_root(validator, &root_moves, color, scorer, depth, &mut positions);
        let elapsed_ms = (chrono::Utc::now() - started).num_milliseconds();

        report.best_move = best_move;
        report.best_score = best_score;
        report.depths.push(DepthStats {
            depth,
            positions,
            elapsed_ms,
            best_score,
            best_move,
        });
    }

    if config.debug {
        for stats in &report.depths {
            log::info!(
                "depth {}: {} positions, {}ms, eval={}",
                stats.depth,
                stats.positions,
                stats.elapsed_ms,
                stats.best_score
            );
        }
        log::info!("best: {}", report.best_move.describe());
    }

    report
}

fn search_root<S: BoardScorer>(
    validator: &mut MoveValidator,
    root_moves: &[Move],
    color: Color,
    scorer: &S,
    depth: u8,
    positions: &mut u64,
) -> (Move, i32) {
    let mut best_move = root_moves[0];
    let mut best_score = match color {
        Color::White => i32::MIN,
        Color::Black => i32::MAX,
    };

    for &root_move in root_moves {
        let Some(score) = score_move(validator, root_move, color, scorer, depth, positions) else {
            continue;
        };
        // Strict comparison keeps the earliest move on ties.
        let improves = match color {
            Color::White => score > best_score,
            Color::Black => score < best_score,
        };
        if improves {
            best_score = score;
            best_move = root_move;
        }
    }

    (best_move, best_score)
}

/// Play `mv`, search the reply to `depth - 1`, and undo it.
fn score_move<S: BoardScorer>(
    validator: &mut MoveValidator,
    mv: Move,
    color: Color,
    scorer: &S,
    depth: u8,
    positions: &mut u64,
) -> Option<i32> {
    let saved = validator.save_state();
    let mut played = mv;
    let score = match validator.execute_move(&mut played, color) {
        Ok(()) => Some(minimax(
            validator,
            color.opposite(),
            scorer,
            depth - 1,
            positions,
        )),
        Err(err) => {
            log::warn!("search skipped {}: {}", mv.describe(), err);
            None
        }
    };
    validator.restore_state(&saved);
    score
}

fn minimax<S: BoardScorer>(
    validator: &mut MoveValidator,
    color: Color,
    scorer: &S,
    depth: u8,
    positions: &mut u64,
) -> i32 {
    if depth == 0 {
        *positions += 1;
        return scorer.score(validator.position());
    }

    let moves = validator.legal_moves_with_promotions(color);
    if moves.is_empty() {
        *positions += 1;
        return terminal_score(validator, color, depth);
    }

    let mut best = match color {
        Color::White => i32::MIN,
        Color::Black => i32::MAX,
    };
    for mv in moves {
        let Some(score) = score_move(validator, mv, color, scorer, depth, positions) else {
            continue;
        };
        best = match color {
            Color::White => best.max(score),
            Color::Black => best.min(score),
        };
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::position::Position;
    use crate::search::board_scoring::MaterialScorer;

    fn sq(text: &str) -> Square {
        Square::from_algebraic(text).expect("test square should parse")
    }

    fn place(position: &mut Position, text: &str, color: Color, kind: PieceKind) {
        position.set_piece(sq(text), Piece::new(color, kind));
    }

    fn shallow(depth: u8) -> SearchConfig {
        SearchConfig {
            max_depth: depth,
            debug: false,
        }
    }

    #[test]
    fn finds_back_rank_mate_in_one() {
        let mut position = Position::new_empty();
        place(&mut position, "g8", Color::Black, PieceKind::King);
        place(&mut position, "f7", Color::Black, PieceKind::Pawn);
        place(&mut position, "g7", Color::Black, PieceKind::Pawn);
        place(&mut position, "h7", Color::Black, PieceKind::Pawn);
        place(&mut position, "a1", Color::White, PieceKind::Rook);
        place(&mut position, "g1", Color::White, PieceKind::King);
        let mut validator = MoveValidator::from_position(position);
        validator.set_castling_rights(CastlingRights::NONE);

        let report = iterative_deepening_search(
            &mut validator,
            Color::White,
            &MaterialScorer,
            shallow(2),
        );

        assert_eq!(report.best_move, Move::new(sq("a1"), sq("a8")));
        assert!(report.best_score >= MATE_SCORE);
    }

    #[test]
    fn black_takes_hanging_queen() {
        let mut position = Position::new_empty();
        place(&mut position, "e1", Color::White, PieceKind::King);
        place(&mut position, "d4", Color::White, PieceKind::Queen);
        place(&mut position, "e8", Color::Black, PieceKind::King);
        place(&mut position, "c6", Color::Black, PieceKind::Knight);
        let mut validator = MoveValidator::from_position(position);
        validator.set_castling_rights(CastlingRights::NONE);

        let report = iterative_deepening_search(
            &mut validator,
            Color::Black,
            &MaterialScorer,
            shallow(1),
        );

        assert_eq!(report.best_move, Move::new(sq("c6"), sq("d4")));
        assert_eq!(report.best_score, -300);
    }

    #[test]
    fn depth_one_from_start_picks_first_move_and_counts_leaves() {
        let mut validator = MoveValidator::new();
        let report = iterative_deepening_search(
            &mut validator,
            Color::White,
            &MaterialScorer,
            shallow(1),
        );

        // All twenty replies score 0; the first enumerated move is kept.
        assert_eq!(report.best_move, Move::new(sq("a2"), sq("a4")));
        assert_eq!(report.best_score, 0);
        assert_eq!(report.depths.len(), 1);
        assert_eq!(report.depths[0].positions, 20);
    }

    #[test]
    fn search_restores_the_position() {
        let mut validator = MoveValidator::new();
        let before = validator.save_state();
        let report = iterative_deepening_search(
            &mut validator,
            Color::White,
            &MaterialScorer,
            shallow(2),
        );

        assert_eq!(validator.save_state(), before);
        assert_eq!(report.reached_depth(), 2);
        assert_eq!(report.depths[1].positions, 400);
        assert_eq!(report.total_positions(), 420);
    }

    #[test]
    fn search_is_deterministic() {
        let mut first = MoveValidator::new();
        let mut second = MoveValidator::new();
        let a = iterative_deepening_search(&mut first, Color::White, &MaterialScorer, shallow(2));
        let b = iterative_deepening_search(&mut second, Color::White, &MaterialScorer, shallow(2));
        assert_eq!(a.best_move, b.best_move);
        assert_eq!(a.best_score, b.best_score);
    }

    #[test]
    fn no_legal_moves_returns_sentinel() {
        let mut position = Position::new_empty();
        place(&mut position, "h8", Color::Black, PieceKind::King);
        place(&mut position, "g6", Color::White, PieceKind::Queen);
        place(&mut position, "f7", Color::White, PieceKind::King);
        let mut validator = MoveValidator::from_position(position);

        let report = iterative_deepening_search(
            &mut validator,
            Color::Black,
            &MaterialScorer,
            SearchConfig::default(),
        );

        assert!(report.best_move.is_none());
        assert_eq!(report.best_score, 0);
        assert!(report.depths.is_empty());
    }

    #[test]
    fn mate_score_grows_with_remaining_depth() {
        let mut position = Position::new_empty();
        place(&mut position, "e8", Color::Black, PieceKind::King);
        place(&mut position, "a8", Color::White, PieceKind::Rook);
        place(&mut position, "b7", Color::White, PieceKind::Rook);
        place(&mut position, "e1", Color::White, PieceKind::King);
        let validator = MoveValidator::from_position(position);

        assert_eq!(terminal_score(&validator, Color::Black, 3), MATE_SCORE + 3);
        assert_eq!(terminal_score(&validator, Color::White, 3), 0);
    }
}
