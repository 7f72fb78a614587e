//! Chess Engine Benchmarks
//!
//! Performance benchmarks for critical engine functions using Criterion.

use chess_engine::{
    choose_move, evaluate_position, generate_moves, make_move, unmake_move, Color, Difficulty,
    Position,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_new_position(c: &mut Criterion) {
    c.bench_function("new_position", |b| b.iter(|| black_box(Position::new())));
}

fn bench_move_generation_starting(c: &mut Criterion) {
    let pos = Position::new();

    c.bench_function("generate_moves_starting_position", |b| {
        b.iter(|| black_box(generate_moves(&pos, Color::White)))
    });
}

fn bench_move_generation_both_colors(c: &mut Criterion) {
    let pos = Position::new();

    c.bench_function("generate_moves_both_colors", |b| {
        b.iter(|| {
            let white = generate_moves(&pos, Color::White);
            let black = generate_moves(&pos, Color::Black);
            black_box((white.len(), black.len()))
        })
    });
}

fn bench_evaluate_position_starting(c: &mut Criterion) {
    let pos = Position::new();

    c.bench_function("evaluate_position_starting", |b| {
        b.iter(|| black_box(evaluate_position(&pos, Color::Black)))
    });
}

fn bench_make_unmake_cycle(c: &mut Criterion) {
    let mut pos = Position::new();
    let moves = generate_moves(&pos, Color::White);

    c.bench_function("make_unmake_all_starting_moves", |b| {
        b.iter(|| {
            for &mv in &moves {
                let undo = make_move(&mut pos, mv);
                unmake_move(&mut pos, undo);
            }
            black_box(pos.en_passant)
        })
    });
}

fn bench_choose_move_by_band(c: &mut Criterion) {
    let mut group = c.benchmark_group("choose_move");
    group.sample_size(20);
    for value in [2u8, 8, 12] {
        let difficulty = Difficulty::clamped(value);
        group.bench_function(format!("difficulty_{value}"), |b| {
            let mut pos = Position::new();
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| black_box(choose_move(&mut pos, Color::Black, difficulty, &mut rng)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_new_position,
    bench_move_generation_starting,
    bench_move_generation_both_colors,
    bench_evaluate_position_starting,
    bench_make_unmake_cycle,
    bench_choose_move_by_band,
);
criterion_main!(benches);
