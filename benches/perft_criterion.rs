use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use gota::move_generation::perft::perft;
use gota::{Board, Player};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    size: usize,
    depths: &'static [u8],
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "board_4",
        size: 4,
        depths: &[1, 2, 3],
    },
    BenchCase {
        name: "board_6",
        size: 6,
        depths: &[1, 2],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "board_4",
        size: 4,
        depths: &[1, 2, 3, 4],
    },
    BenchCase {
        name: "board_6",
        size: 6,
        depths: &[1, 2, 3],
    },
    BenchCase {
        name: "board_8",
        size: 8,
        depths: &[1, 2, 3],
    },
];

fn selected_cases() -> &'static [BenchCase] {
    match std::env::var("GOTA_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let suite_name = match std::env::var("GOTA_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let board = Board::new(case.size, 0).expect("benchmark board size should be valid");

        for &depth in case.depths {
            let expected = perft(&board, Player::White, depth)
                .expect("perft should run")
                .nodes;

            group.throughput(Throughput::Elements(expected as u64));
            let bench_name = format!("{}_d{}", case.name, depth);

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                &expected,
                |b, expected| {
                    b.iter(|| {
                        let counts = perft(black_box(&board), Player::White, black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(counts.nodes, *expected);
                        black_box(counts.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_legal_actions(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_actions");
    for size in [4usize, 8, 16, 26] {
        let board = Board::new(size, 0).expect("benchmark board size should be valid");
        group.bench_with_input(BenchmarkId::from_parameter(size), &board, |b, board| {
            let mut buf = Vec::new();
            b.iter(|| {
                board.legal_actions_in_place(Player::Black, &mut buf);
                black_box(buf.len())
            });
        });
    }
    group.finish();
}

criterion_group!(perft_benches, bench_perft, bench_legal_actions);
criterion_main!(perft_benches);
