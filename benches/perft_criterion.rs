use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_rules::game_state::game_state::GameState;
use chess_rules::move_generation::legal_move_generator::{
    ExhaustiveMoveGenerator, PinAwareMoveGenerator,
};
use chess_rules::move_generation::move_generator::MoveGenerator;
use chess_rules::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_2",
        fen: KIWIPETE_FEN,
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "position_3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2812],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "position_2",
        fen: KIWIPETE_FEN,
        expected_nodes: &[48, 2039, 97_862],
    },
    BenchCase {
        name: "position_3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2812, 43_238],
    },
    BenchCase {
        name: "position_4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        expected_nodes: &[6, 264, 9467, 422_333],
    },
    BenchCase {
        name: "position_5",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        expected_nodes: &[44, 1486, 62_379],
    },
];

fn suite_is_standard() -> bool {
    matches!(
        std::env::var("CHESS_RULES_BENCH_SUITE"),
        Ok(value) if value.eq_ignore_ascii_case("standard")
    )
}

fn selected_cases() -> &'static [BenchCase] {
    if suite_is_standard() {
        CASES_STANDARD
    } else {
        CASES_QUICK
    }
}

fn bench_perft(c: &mut Criterion) {
    let suite_name = if suite_is_standard() { "standard" } else { "quick" };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let mut warmup_game = game.clone();
            let warmup = perft(&PinAwareMoveGenerator, &mut warmup_game, depth);
            assert_eq!(
                warmup, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);
            let mut bench_game = game.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(&PinAwareMoveGenerator, black_box(&mut bench_game), black_box(depth));
                        assert_eq!(count, *expected);
                        black_box(count)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator_comparison");
    group.sample_size(20);

    let generators: [(&str, &dyn MoveGenerator); 2] = [
        ("pin_aware", &PinAwareMoveGenerator),
        ("exhaustive", &ExhaustiveMoveGenerator),
    ];

    for (name, generator) in generators {
        let mut game = GameState::from_fen(KIWIPETE_FEN).expect("benchmark FEN should parse");
        group.bench_function(BenchmarkId::new(name, "kiwipete_d2"), |b| {
            b.iter(|| black_box(perft(generator, &mut game, black_box(2))));
        });
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft, bench_generators);
criterion_main!(perft_benches);
