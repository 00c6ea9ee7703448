//! Board module - the N×N tile grid and the move algorithm
//!
//! The board is a square grid of tiles where 0 is an empty cell.
//! Uses a flat fixed-size array (sized for the largest board) so boards are `Copy`
//! and moves never allocate. Coordinates are `(row, col)`, both in `0..size`,
//! row 0 at the top.
//!
//! Every move is built from four row-wise primitives:
//!
//! - [`Board::compress`]: slide non-zero tiles to the left
//! - [`Board::merge`]: one left-to-right pass joining equal neighbours
//! - [`Board::reverse`]: mirror every row
//! - [`Board::transpose`]: swap rows and columns
//!
//! `move_left` is compress → merge → compress; the other three directions
//! conjugate it with `reverse` and/or `transpose`.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{is_valid_board_size, Direction, Tile, MAX_CELLS};

/// The game board - `size` × `size` tiles using flat array storage
///
/// Cells outside the `size * size` prefix are always 0, so the derived
/// equality compares boards cell by cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    /// Row-major cells (row * size + col)
    cells: [Tile; MAX_CELLS],
}

impl Board {
    /// Create a new empty board of the given side length
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn new(size: usize) -> Self {
        assert!(
            is_valid_board_size(size),
            "board size {} out of range",
            size
        );
        Self {
            size,
            cells: [0; MAX_CELLS],
        }
    }

    /// Build a board from rows
    ///
    /// Returns `None` unless the rows form a square of a supported size.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Option<Self> {
        let size = rows.len();
        if !is_valid_board_size(size) || rows.iter().any(|row| row.as_ref().len() != size) {
            return None;
        }

        let mut board = Self::new(size);
        for (r, row) in rows.iter().enumerate() {
            for (c, &tile) in row.as_ref().iter().enumerate() {
                board.cells[r * size + c] = tile;
            }
        }
        Some(board)
    }

    /// Copy the board out as nested rows (for tests and display)
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> Tile {
        self.cells[row * self.size + col]
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get tile at `(row, col)`; `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set tile at `(row, col)`; returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// The in-use cells, row-major
    pub fn cells(&self) -> &[Tile] {
        &self.cells[..self.size * self.size]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.cells().chunks_exact(self.size)
    }

    /// Positions of all empty cells, computed fresh on every call
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), MAX_CELLS> {
        let mut out = ArrayVec::new();
        for (idx, &tile) in self.cells().iter().enumerate() {
            if tile == 0 {
                out.push((idx / self.size, idx % self.size));
            }
        }
        out
    }

    pub fn is_full(&self) -> bool {
        self.cells().iter().all(|&tile| tile != 0)
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> Tile {
        self.cells().iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tiles
    pub fn sum(&self) -> u64 {
        self.cells().iter().map(|&tile| tile as u64).sum()
    }

    /// Slide every non-zero tile to the left of its row, keeping order
    pub fn compress(&self) -> Board {
        let n = self.size;
        let mut out = Board::new(n);
        for r in 0..n {
            let mut pos = 0;
            for c in 0..n {
                let tile = self.at(r, c);
                if tile != 0 {
                    out.cells[r * n + pos] = tile;
                    pos += 1;
                }
            }
        }
        out
    }

    /// Join equal neighbours in a single left-to-right pass over each row
    ///
    /// The left cell of a pair doubles, the right one becomes 0 and the new
    /// value is added to `score`. The zeroed cell cannot pair with its right
    /// neighbour, so no tile merges twice in one pass. Tile values and the
    /// score saturate at `u32::MAX`.
    pub fn merge(&self, score: u32) -> (Board, u32) {
        let n = self.size;
        let mut out = *self;
        let mut score = score;
        for r in 0..n {
            for c in 0..n - 1 {
                let i = r * n + c;
                let tile = out.cells[i];
                if tile != 0 && tile == out.cells[i + 1] {
                    let merged = tile.saturating_mul(2);
                    out.cells[i] = merged;
                    out.cells[i + 1] = 0;
                    score = score.saturating_add(merged);
                }
            }
        }
        (out, score)
    }

    /// Mirror every row (column `c` ↔ column `size - 1 - c`)
    pub fn reverse(&self) -> Board {
        let n = self.size;
        let mut out = Board::new(n);
        for r in 0..n {
            for c in 0..n {
                out.cells[r * n + c] = self.at(r, n - 1 - c);
            }
        }
        out
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Board {
        let n = self.size;
        let mut out = Board::new(n);
        for r in 0..n {
            for c in 0..n {
                out.cells[r * n + c] = self.at(c, r);
            }
        }
        out
    }

    pub fn move_left(&self, score: u32) -> (Board, u32) {
        let (merged, score) = self.compress().merge(score);
        (merged.compress(), score)
    }

    pub fn move_right(&self, score: u32) -> (Board, u32) {
        let (moved, score) = self.reverse().move_left(score);
        (moved.reverse(), score)
    }

    pub fn move_up(&self, score: u32) -> (Board, u32) {
        let (moved, score) = self.transpose().move_left(score);
        (moved.transpose(), score)
    }

    pub fn move_down(&self, score: u32) -> (Board, u32) {
        let (moved, score) = self.transpose().move_right(score);
        (moved.transpose(), score)
    }

    /// Apply a directional move, returning the new board and score
    ///
    /// Whether anything changed is for the caller to decide by comparing the
    /// returned board with `self`.
    pub fn apply_move(&self, dir: Direction, score: u32) -> (Board, u32) {
        match dir {
            Direction::Left => self.move_left(score),
            Direction::Right => self.move_right(score),
            Direction::Up => self.move_up(score),
            Direction::Down => self.move_down(score),
        }
    }

    /// True when the board is full and no two neighbours are equal
    ///
    /// Relies on the board being square: `(r, c)`/`(r, c + 1)` walks the
    /// rows and `(c, r)`/`(c + 1, r)` walks the columns with the same bounds.
    pub fn check_game_over(&self) -> bool {
        if !self.is_full() {
            return false;
        }

        let n = self.size;
        for r in 0..n {
            for c in 0..n - 1 {
                if self.at(r, c) == self.at(r, c + 1) {
                    return false;
                }
                if self.at(c, r) == self.at(c + 1, r) {
                    return false;
                }
            }
        }
        true
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, tile) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>5}", tile)?;
            }
        }
        Ok(())
    }
}

/// Free-function form of [`Board::compress`].
pub fn compress(board: &Board) -> Board {
    board.compress()
}

/// Free-function form of [`Board::merge`].
pub fn merge(board: &Board, score: u32) -> (Board, u32) {
    board.merge(score)
}

/// Free-function form of [`Board::check_game_over`].
pub fn check_game_over(board: &Board) -> bool {
    board.check_game_over()
}
