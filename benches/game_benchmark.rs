//! Benchmarks for running complete games.
//!
//! This benchmarks the full game loop and the track walk underneath it.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use crosstrack::{Board, Coord, GameConfig, Geometry, SeatLayout, render_text, run_game};

fn bench_single_game(c: &mut Criterion) {
    let config = GameConfig::default();

    c.bench_function("single_game_2p", |b| {
        b.iter(|| {
            let result = run_game(black_box(42), black_box(&config));
            black_box(result)
        });
    });
}

fn bench_single_game_4p(c: &mut Criterion) {
    let config = GameConfig {
        size: 13,
        layout: SeatLayout::FourPlayer,
        players: 4,
        ..GameConfig::default()
    };

    c.bench_function("single_game_4p", |b| {
        b.iter(|| {
            let result = run_game(black_box(42), black_box(&config));
            black_box(result)
        });
    });
}

fn bench_game_batch(c: &mut Criterion) {
    // 10 games sequentially, without parallel overhead
    let config = GameConfig::default();

    c.bench_function("10_games_sequential", |b| {
        b.iter(|| {
            for seed in 0..10u64 {
                let result = run_game(black_box(seed), black_box(&config));
                let _ = black_box(result);
            }
        });
    });
}

fn bench_track_lap(c: &mut Criterion) {
    let Ok(geometry) = Geometry::new(101) else {
        return;
    };
    let start = Coord::new(geometry.mid() + 1, 0);

    c.bench_function("track_lap_101", |b| {
        b.iter(|| {
            let mut pos = black_box(start);
            for _ in 0..geometry.track_len() {
                match geometry.advance(pos) {
                    Some(next) => pos = next,
                    None => break,
                }
            }
            black_box(pos)
        });
    });
}

fn bench_render(c: &mut Criterion) {
    let Ok(board) = Board::new(41) else {
        return;
    };

    c.bench_function("render_41", |b| {
        b.iter(|| black_box(render_text(black_box(&board))));
    });
}

criterion_group!(
    benches,
    bench_single_game,
    bench_single_game_4p,
    bench_game_batch,
    bench_track_lap,
    bench_render
);
criterion_main!(benches);
