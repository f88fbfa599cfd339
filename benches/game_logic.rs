use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Game, Grid};
use blockfall::types::{GameAction, GRID_COLS};

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            game.tick();
            if game.is_game_over() {
                game.reset();
            }
            black_box(game.drain_events());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            // Fill bottom 4 rows
            for row in 16..20 {
                for column in 0..GRID_COLS as i32 {
                    let _ = grid.set(row, column, 3);
                }
            }
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_move_down(c: &mut Criterion) {
    let mut game = Game::new(12345);

    c.bench_function("move_down_action", |b| {
        b.iter(|| {
            game.apply_action(black_box(GameAction::MoveDown));
            if game.is_game_over() {
                game.reset();
            }
            game.drain_events();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = Game::new(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            game.rotate();
            game.drain_events();
        })
    });
}

criterion_group!(benches, bench_tick, bench_line_clear, bench_move_down, bench_rotate);
criterion_main!(benches);
