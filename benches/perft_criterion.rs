use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bitboard_chess::game_state::chess_types::*;
use bitboard_chess::game_state::position::Position;
use bitboard_chess::move_generation::move_validator::MoveValidator;
use bitboard_chess::move_generation::perft::perft;
use bitboard_chess::search::board_scoring::MaterialScorer;
use bitboard_chess::search::minimax::{iterative_deepening_search, SearchConfig};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    build: fn() -> MoveValidator,
    to_move: Color,
    expected_nodes: &'static [u64],
}

/// Rook-and-pawn endgame with en passant pins along the fifth rank.
fn rook_endgame() -> MoveValidator {
    let placements: [(&str, Color, PieceKind); 10] = [
        ("c7", Color::Black, PieceKind::Pawn),
        ("d6", Color::Black, PieceKind::Pawn),
        ("a5", Color::White, PieceKind::King),
        ("b5", Color::White, PieceKind::Pawn),
        ("h5", Color::Black, PieceKind::Rook),
        ("b4", Color::White, PieceKind::Rook),
        ("f4", Color::Black, PieceKind::Pawn),
        ("h4", Color::Black, PieceKind::King),
        ("e2", Color::White, PieceKind::Pawn),
        ("g2", Color::White, PieceKind::Pawn),
    ];
    let mut position = Position::new_empty();
    for (square, color, kind) in placements {
        let square = Square::from_algebraic(square).expect("bench square should parse");
        position.set_piece(square, Piece::new(color, kind));
    }
    let mut validator = MoveValidator::from_position(position);
    validator.set_castling_rights(CastlingRights::NONE);
    validator
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        build: MoveValidator::new,
        to_move: Color::White,
        expected_nodes: &[20, 400],
    },
    BenchCase {
        name: "rook_endgame",
        build: rook_endgame,
        to_move: Color::White,
        expected_nodes: &[14, 191],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        build: MoveValidator::new,
        to_move: Color::White,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "rook_endgame",
        build: rook_endgame,
        to_move: Color::White,
        expected_nodes: &[14, 191, 2812],
    },
];

fn standard_suite() -> bool {
    matches!(std::env::var("CHESS_BENCH_SUITE"), Ok(value) if value.eq_ignore_ascii_case("standard"))
}

fn bench_perft(c: &mut Criterion) {
    let (suite_name, cases) = if standard_suite() {
        ("standard", CASES_STANDARD)
    } else {
        ("quick", CASES_QUICK)
    };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in cases {
        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let mut validator = (case.build)();
            let warmup = perft(&mut validator, case.to_move, depth);
            assert_eq!(
                warmup.nodes, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let counts = perft(&mut validator, case.to_move, black_box(depth));
                        assert_eq!(counts.nodes, *expected);
                        black_box(counts.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax_startpos");
    group.sample_size(10);

    for depth in 1..=2u8 {
        let config = SearchConfig {
            max_depth: depth,
            debug: false,
        };
        group.bench_with_input(BenchmarkId::from_parameter(depth), &config, |b, config| {
            let mut validator = MoveValidator::new();
            b.iter(|| {
                let report =
                    iterative_deepening_search(&mut validator, Color::White, &MaterialScorer, *config);
                black_box(report.best_move)
            });
        });
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft, bench_search);
criterion_main!(perft_benches);
