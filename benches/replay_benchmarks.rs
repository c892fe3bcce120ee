use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use grid_rules::core::Direction::{self, *};
use grid_rules::core::GameState;
use grid_rules::level::get_all_level_symmetries;
use grid_rules::replay::verify_solution;

const PUZZLES: &[(&str, &str, &[Direction])] = &[
    ("corridor", "40000000003", &[Right, Right, Right, Right, Right, Right, Right, Right, Right, Right]),
    ("push_into_hole", "42003\n00000", &[Down, Right, Right, Right, Right, Up]),
    ("directional", r#"1111111
1460051
1007001
1000031
1111111"#, &[Right, Right, Right, Up, Right, Down, Down, Right]),
];

pub fn bench_verify_solution(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify_solution");
    for &(name, level, directions) in PUZZLES {
        group.bench_with_input(BenchmarkId::new("replay", name), &(level, directions), |b, &(level, directions)| {
            b.iter(|| verify_solution(black_box(level), black_box(directions)))
        });
    }
    group.finish();
}

pub fn bench_apply_and_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_and_undo");
    for &(name, level, directions) in PUZZLES {
        group.bench_with_input(BenchmarkId::new("round_trip", name), &(level, directions), |b, &(level, directions)| {
            b.iter_with_setup(
                || GameState::initialize(level).expect("benchmark level is valid"),
                |mut game| {
                    for &dir in directions {
                        game.apply_move(black_box(dir), false);
                    }
                    while game.undo() {}
                    game
                },
            )
        });
    }
    group.finish();
}

pub fn bench_symmetries(c: &mut Criterion) {
    let level = r#"1111111111
1400E05001
10270A0501
1002I00001
10J0H00C01
150K006031
1111111111"#;
    c.bench_function("all_level_symmetries", |b| {
        b.iter(|| get_all_level_symmetries(black_box(level)))
    });
}

criterion_group!(benches, bench_verify_solution, bench_apply_and_undo, bench_symmetries);
criterion_main!(benches);
