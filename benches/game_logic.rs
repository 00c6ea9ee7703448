use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use twenty48::core::{add_new_tile, Board, GameSession};
use twenty48::types::Direction;

fn crowded_board(size: usize) -> Board {
    let mut board = Board::new(size);
    for r in 0..size {
        for c in 0..size {
            board.set(r, c, 2 << ((r * size + c) % 6));
        }
    }
    board
}

fn bench_move_left(c: &mut Criterion) {
    let board = crowded_board(4);

    c.bench_function("move_left_4x4", |b| {
        b.iter(|| black_box(&board).move_left(black_box(0)))
    });
}

fn bench_apply_move_all_directions(c: &mut Criterion) {
    let board = crowded_board(8);

    c.bench_function("apply_move_8x8_all_dirs", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                black_box(board.apply_move(dir, 0));
            }
        })
    });
}

fn bench_game_over_check(c: &mut Criterion) {
    let mut board = Board::new(4);
    for r in 0..4 {
        for col in 0..4 {
            board.set(r, col, if (r + col) % 2 == 0 { 2 } else { 4 });
        }
    }

    c.bench_function("check_game_over_full", |b| {
        b.iter(|| black_box(&board).check_game_over())
    });
}

fn bench_add_new_tile(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("add_new_tile", |b| {
        b.iter(|| {
            let mut board = Board::new(4);
            add_new_tile(&mut board, &mut rng)
        })
    });
}

fn bench_session_moves(c: &mut Criterion) {
    let mut session = GameSession::new(4, 12345, 0);
    let mut i = 0usize;

    c.bench_function("session_apply_move", |b| {
        b.iter(|| {
            i = i.wrapping_add(1);
            let outcome = session.apply_move(Direction::ALL[i % 4]);
            if outcome.game_over {
                session.restart();
            }
        })
    });
}

criterion_group!(
    benches,
    bench_move_left,
    bench_apply_move_all_directions,
    bench_game_over_check,
    bench_add_new_tile,
    bench_session_moves
);
criterion_main!(benches);
