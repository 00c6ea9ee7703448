use crate::session::GameStatus;
use crate::types::{Tile, MAX_BOARD_SIZE};

/// Allocation-free copy of everything a view needs to draw a session.
///
/// Only the top-left `size` × `size` corner of `board` is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub size: u8,
    pub board: [[Tile; MAX_BOARD_SIZE]; MAX_BOARD_SIZE],
    pub score: u32,
    pub best: u32,
    pub status: GameStatus,
    pub moves: u32,
    pub episode_id: u32,
    pub max_tile: Tile,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.size = 0;
        self.board = [[0; MAX_BOARD_SIZE]; MAX_BOARD_SIZE];
        self.score = 0;
        self.best = 0;
        self.status = GameStatus::Playing;
        self.moves = 0;
        self.episode_id = 0;
        self.max_tile = 0;
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Iterate the meaningful rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        let n = self.size as usize;
        self.board[..n].iter().map(move |row| &row[..n])
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            size: 0,
            board: [[0; MAX_BOARD_SIZE]; MAX_BOARD_SIZE],
            score: 0,
            best: 0,
            status: GameStatus::Playing,
            moves: 0,
            episode_id: 0,
            max_tile: 0,
        }
    }
}
