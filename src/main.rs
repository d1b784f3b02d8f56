//! Headless self-play: minimax (White) against a random mover (Black).
//!
//! Configured through `CHESS_DEBUG`, `CHESS_MAX_PLIES`, `CHESS_SEARCH_DEPTH`
//! and `CHESS_SEED`.

use bitboard_chess::engines::engine_minimax::MinimaxAgent;
use bitboard_chess::engines::engine_random::RandomAgent;
use bitboard_chess::engines::engine_trait::ChessAgent;
use bitboard_chess::utils::engine_match_harness::{play_match, MatchConfig};
use bitboard_chess::utils::logging::init_logging;
use bitboard_chess::utils::render_game_state::render_position;

fn main() {
    let config = MatchConfig::from_env();
    init_logging(config.debug);

    let mut white = MinimaxAgent::new(config.search_config());
    let mut black = match config.seed {
        Some(seed) => RandomAgent::with_seed(seed),
        None => RandomAgent::new(),
    };

    println!(
        "{} (White, depth {}) vs {} (Black), max {} plies",
        white.name(),
        config.search_depth,
        black.name(),
        config.max_plies
    );

    match play_match(&mut white, &mut black, &config) {
        Ok(result) => {
            println!("{}", render_position(&result.final_position));
            println!("{}", result.played_moves.join(" "));
            println!("{} ({} plies)", result.outcome.description(), result.plies());
        }
        Err(err) => {
            eprintln!("match aborted: {err}");
            std::process::exit(1);
        }
    }
}
