//! Board engine tests: slide/merge rules, transforms and end-of-game detection

use rand::{rngs::StdRng, Rng, SeedableRng};

use twenty48::core::{add_new_tile, check_game_over, compress, merge, Board};
use twenty48::types::{Direction, Tile};

fn board4(rows: [[Tile; 4]; 4]) -> Board {
    Board::from_rows(&rows).unwrap()
}

fn random_board<R: Rng>(rng: &mut R, size: usize) -> Board {
    const VALUES: [Tile; 6] = [0, 2, 4, 8, 16, 32];
    let mut board = Board::new(size);
    for r in 0..size {
        for c in 0..size {
            board.set(r, c, VALUES[rng.gen_range(0..VALUES.len())]);
        }
    }
    board
}

#[test]
fn test_board_new_empty() {
    for size in 2..=8 {
        let board = Board::new(size);
        assert_eq!(board.size(), size);
        assert_eq!(board.empty_cells().len(), size * size);
        assert!(!board.is_full());
        assert_eq!(board.max_tile(), 0);
    }
}

#[test]
fn test_board_get_set_out_of_bounds() {
    let mut board = Board::new(4);
    assert!(board.set(3, 3, 8));
    assert_eq!(board.get(3, 3), Some(8));
    assert!(!board.set(4, 0, 2));
    assert!(!board.set(0, 4, 2));
    assert_eq!(board.get(4, 0), None);
    assert_eq!(board.get(0, 4), None);
}

#[test]
fn test_slide_adjacent_pair() {
    let board = board4([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let (after, score) = board.move_left(0);
    assert_eq!(after.to_rows()[0], vec![4, 0, 0, 0]);
    assert_eq!(score, 4);
}

#[test]
fn test_slide_pair_with_gap() {
    let board = board4([[2, 0, 2, 0], [0; 4], [0; 4], [0; 4]]);
    let (after, score) = board.move_left(10);
    assert_eq!(after.to_rows()[0], vec![4, 0, 0, 0]);
    assert_eq!(score, 14);
}

#[test]
fn test_no_cascading_merge() {
    let board = board4([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
    let (after, score) = board.move_left(0);
    assert_eq!(after.to_rows()[0], vec![4, 4, 0, 0]);
    assert_eq!(score, 8);

    let board = board4([[4, 4, 8, 0], [0; 4], [0; 4], [0; 4]]);
    let (after, score) = board.move_left(0);
    assert_eq!(after.to_rows()[0], vec![8, 8, 0, 0]);
    assert_eq!(score, 8);
}

#[test]
fn test_each_direction() {
    let board = board4([[2, 0, 0, 2], [0; 4], [0; 4], [2, 0, 0, 0]]);

    let (right, _) = board.apply_move(Direction::Right, 0);
    assert_eq!(right.to_rows()[0], vec![0, 0, 0, 4]);
    assert_eq!(right.to_rows()[3], vec![0, 0, 0, 2]);

    let (up, score) = board.apply_move(Direction::Up, 0);
    assert_eq!(up.to_rows()[0], vec![4, 0, 0, 2]);
    assert_eq!(score, 4);

    let (down, score) = board.apply_move(Direction::Down, 0);
    assert_eq!(down.to_rows()[3], vec![4, 0, 0, 2]);
    assert_eq!(score, 4);
}

#[test]
fn test_compress_keeps_order() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let board = random_board(&mut rng, 5);
        let packed = compress(&board);
        for (before, after) in board.rows().zip(packed.rows()) {
            let nonzero: Vec<Tile> = before.iter().copied().filter(|&t| t != 0).collect();
            assert_eq!(&after[..nonzero.len()], nonzero.as_slice());
            assert!(after[nonzero.len()..].iter().all(|&t| t == 0));
        }
    }
}

#[test]
fn test_merge_conserves_sum_and_scores_new_tiles() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let board = compress(&random_board(&mut rng, 4));
        let (merged, score) = merge(&board, 0);
        assert_eq!(merged.sum(), board.sum());

        // Score is the value of the cells that doubled in place.
        let created: u64 = board
            .cells()
            .iter()
            .zip(merged.cells())
            .filter(|(b, m)| **m != 0 && **m == **b * 2)
            .map(|(_, m)| *m as u64)
            .sum();
        assert_eq!(score as u64, created);
    }
}

#[test]
fn test_left_then_right_without_merges() {
    let board = board4([[2, 4, 8, 16], [4, 8, 16, 32], [2, 4, 8, 16], [4, 8, 16, 32]]);
    let (left, _) = board.move_left(0);
    let (back, _) = left.move_right(0);
    assert_eq!(back, board);
}

#[test]
fn test_move_left_reaches_fixed_point() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let board = random_board(&mut rng, 4);
        let (once, _) = board.move_left(0);
        let has_pair = once
            .rows()
            .any(|row| row.windows(2).any(|w| w[0] != 0 && w[0] == w[1]));
        if !has_pair {
            let (twice, gained) = once.move_left(0);
            assert_eq!(twice, once);
            assert_eq!(gained, 0);
        }
    }
}

#[test]
fn test_reverse_and_transpose_are_involutions() {
    let mut rng = StdRng::seed_from_u64(5);
    for size in 2..=8 {
        let board = random_board(&mut rng, size);
        assert_eq!(board.reverse().reverse(), board);
        assert_eq!(board.transpose().transpose(), board);
    }
}

#[test]
fn test_game_over_false_with_empty_cell() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..100 {
        let mut board = random_board(&mut rng, 4);
        board.set(rng.gen_range(0..4), rng.gen_range(0..4), 0);
        assert!(!check_game_over(&board));
    }
}

#[test]
fn test_game_over_checkerboard() {
    for size in 2..=8 {
        let mut board = Board::new(size);
        for r in 0..size {
            for c in 0..size {
                board.set(r, c, if (r + c) % 2 == 0 { 2 } else { 4 });
            }
        }
        assert!(board.is_full());
        assert!(check_game_over(&board), "{}x{} checkerboard", size, size);
        for dir in Direction::ALL {
            assert_eq!(board.apply_move(dir, 0).0, board);
        }
    }
}

#[test]
fn test_game_not_over_with_vertical_pair() {
    let board = board4([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [2, 8, 4, 2]]);
    assert!(!check_game_over(&board));
    let (up, score) = board.move_up(0);
    assert_ne!(up, board);
    assert_eq!(score, 4);
}

#[test]
fn test_add_new_tile_fills_last_empty_cell() {
    let mut board = board4([[2, 4, 2, 4], [4, 2, 4, 2], [2, 0, 2, 4], [4, 2, 4, 2]]);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(add_new_tile(&mut board, &mut rng), Some((2, 1)));
    let tile = board.get(2, 1).unwrap();
    assert!(tile == 2 || tile == 4);
    assert!(board.is_full());

    assert_eq!(add_new_tile(&mut board, &mut rng), None);
}

#[test]
fn test_spawn_distribution() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut fours = 0;
    for _ in 0..10_000 {
        let mut board = Board::new(4);
        let (r, c) = add_new_tile(&mut board, &mut rng).unwrap();
        match board.get(r, c).unwrap() {
            2 => {}
            4 => fours += 1,
            other => panic!("unexpected tile {}", other),
        }
    }
    assert!((700..1300).contains(&fours), "fours = {}", fours);
}

#[test]
fn test_spawn_position_uniform_on_empty_board() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut counts = [[0u32; 4]; 4];
    for _ in 0..16_000 {
        let mut board = Board::new(4);
        let (r, c) = add_new_tile(&mut board, &mut rng).unwrap();
        counts[r][c] += 1;
    }
    for (r, row) in counts.iter().enumerate() {
        for (c, &n) in row.iter().enumerate() {
            assert!((850..1150).contains(&n), "cell ({}, {}) got {}", r, c, n);
        }
    }
}

#[test]
fn test_spawn_only_into_cells_empty_at_call_time() {
    // Checkerboard of occupied cells leaves 8 candidates.
    let board = board4([[2, 0, 4, 0], [0, 8, 0, 16], [32, 0, 64, 0], [0, 128, 0, 256]]);
    let empty: Vec<(usize, usize)> = board.empty_cells().to_vec();
    assert_eq!(empty.len(), 8);

    let mut rng = StdRng::seed_from_u64(8);
    let mut counts = [[0u32; 4]; 4];
    for _ in 0..8_000 {
        let mut b = board;
        let (r, c) = add_new_tile(&mut b, &mut rng).unwrap();
        assert!(empty.contains(&(r, c)), "spawned into occupied ({}, {})", r, c);
        counts[r][c] += 1;
    }
    for &(r, c) in &empty {
        assert!((850..1150).contains(&counts[r][c]), "cell ({}, {}) got {}", r, c, counts[r][c]);
    }
}
