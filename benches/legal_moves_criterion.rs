use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use duel_chess_rules::game_state::position::Position;
use duel_chess_rules::move_generation::legal_move_generator::{
    all_legal_moves, legal_moves, Selection,
};
use duel_chess_rules::move_generation::terminal_state::game_status;

#[derive(Clone, Copy)]
struct PerfCase {
    name: &'static str,
    fen: &'static str,
}

const CASES: &[PerfCase] = &[
    PerfCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
    },
    PerfCase {
        name: "classical_mid",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w",
    },
    PerfCase {
        name: "fools_mate",
        fen: "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w",
    },
    PerfCase {
        name: "stalemate",
        fen: "8/8/8/8/8/1q6/2k5/K7 w",
    },
];

fn bench_rules_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules_queries");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(30);

    for case in CASES {
        let (position, turn) = Position::from_fen(case.fen).expect("benchmark FEN should parse");

        group.bench_with_input(
            BenchmarkId::new("all_legal_moves", case.name),
            &position,
            |b, position| {
                b.iter(|| {
                    let moves = all_legal_moves(black_box(position), turn)
                        .expect("benchmark position is well formed");
                    black_box(moves.len())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("selection_queries", case.name),
            &position,
            |b, position| {
                b.iter(|| {
                    let mut total = 0usize;
                    for square in legal_moves(position, Selection::None, turn)
                        .expect("benchmark position is well formed")
                        .squares()
                    {
                        total += legal_moves(black_box(position), Selection::Square(square), turn)
                            .expect("benchmark position is well formed")
                            .squares()
                            .len();
                    }
                    black_box(total)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("game_status", case.name),
            &position,
            |b, position| {
                b.iter(|| {
                    black_box(
                        game_status(black_box(position), turn)
                            .expect("benchmark position is well formed"),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(rules_benches, bench_rules_queries);
criterion_main!(rules_benches);
