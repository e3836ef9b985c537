use criterion::{black_box, criterion_group, criterion_main, Criterion};

use landgrab::game::Game;
use landgrab::protocol::render::render_board;

/// Fills a 64x64 board row by row with one player: one new-area move
/// followed by 4095 single-fragment merges.
fn bench_row_major_fill(c: &mut Criterion) {
    c.bench_function("fill_64x64_row_major", |b| {
        b.iter(|| {
            let mut game = Game::new(64, 64, 1, 1).unwrap();
            for y in 0..64 {
                for x in 0..64 {
                    game.apply_move(1, black_box(x), y);
                }
            }
            game
        })
    });
}

/// Builds 32 disjoint column fragments, then welds them with a top row:
/// every spine move merges and recolors a 63-cell tooth.
fn bench_comb_merge(c: &mut Criterion) {
    c.bench_function("comb_merge_64x64", |b| {
        b.iter(|| {
            let mut game = Game::new(64, 64, 1, 32).unwrap();
            for x in (0..64).step_by(2) {
                for y in 0..63 {
                    game.apply_move(1, x, y);
                }
            }
            for x in 0..64 {
                game.apply_move(1, black_box(x), 63);
            }
            game
        })
    });
}

/// Renders a fully occupied 128x128 board.
fn bench_render(c: &mut Criterion) {
    let mut game = Game::new(128, 128, 1, 1).unwrap();
    for y in 0..128 {
        for x in 0..128 {
            game.apply_move(1, x, y);
        }
    }
    c.bench_function("render_128x128", |b| {
        b.iter(|| render_board(black_box(&game)))
    });
}

criterion_group!(benches, bench_row_major_fill, bench_comb_merge, bench_render);
criterion_main!(benches);
