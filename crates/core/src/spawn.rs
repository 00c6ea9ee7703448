//! Tile spawning - places a new 2 or 4 into a random empty cell.
//!
//! Generic over any `rand::Rng` so sessions can run from a seeded `StdRng`
//! and tests can pin the outcome.

use log::trace;
use rand::Rng;

use crate::board::Board;
use crate::types::{Tile, FOUR_TILE, FOUR_TILE_PROBABILITY, TWO_TILE};

/// Draw the value of a freshly spawned tile: 4 with probability 0.1, else 2.
pub fn spawn_tile_value<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_bool(FOUR_TILE_PROBABILITY) {
        FOUR_TILE
    } else {
        TWO_TILE
    }
}

/// Place one new tile into a uniformly chosen empty cell
///
/// Empty cells are collected from the board at call time. Returns the filled
/// position, or `None` (leaving the board untouched) when the board is full.
pub fn add_new_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<(usize, usize)> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let tile = spawn_tile_value(rng);
    board.set(row, col, tile);
    trace!("spawned {} at ({}, {})", tile, row, col);
    Some((row, col))
}
