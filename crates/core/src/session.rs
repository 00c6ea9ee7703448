//! Game session module - one play-through from initialization to restart/exit
//!
//! The session owns the board, the running score, the best score seen so far
//! and the RNG used for tile spawns. It is the only mutator of that state.
//!
//! State machine:
//!
//! ```text
//! Playing --move that changes the board--> Playing   (spawn + game-over check)
//! Playing --game-over check true---------> GameOver
//! GameOver --restart---------------------> Playing
//! ```

use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::board::Board;
use crate::snapshot::GameSnapshot;
use crate::spawn::add_new_tile;
use crate::types::{Direction, GameAction, START_TILES};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    GameOver,
}

/// What a single action did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// The board differs from the one before the action.
    pub changed: bool,
    /// Points added by merges.
    pub gained: u32,
    /// Cell that received the spawned tile, if any.
    pub spawned: Option<(usize, usize)>,
    /// The session is in `GameOver` after this action.
    pub game_over: bool,
    /// The score went past the previous best.
    pub new_best: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    score: u32,
    best: u32,
    status: GameStatus,
    rng: StdRng,
    seed: u64,
    /// Number of board-changing moves in the current episode.
    moves: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
}

impl GameSession {
    /// Start a session on a `size` × `size` board
    ///
    /// `best` is the high score loaded by the caller; it only ever grows from here.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not a supported board size (see [`Board::new`]).
    pub fn new(size: usize, seed: u64, best: u32) -> Self {
        let mut session = Self {
            board: Board::new(size),
            score: 0,
            best,
            status: GameStatus::Playing,
            rng: StdRng::seed_from_u64(seed),
            seed,
            moves: 0,
            episode_id: 0,
        };
        session.init();
        session
    }

    /// Start a session from an existing board (puzzles, tests)
    pub fn from_board(board: Board, seed: u64, best: u32) -> Self {
        let status = if board.check_game_over() {
            GameStatus::GameOver
        } else {
            GameStatus::Playing
        };
        Self {
            board,
            score: 0,
            best,
            status,
            rng: StdRng::seed_from_u64(seed),
            seed,
            moves: 0,
            episode_id: 0,
        }
    }

    fn init(&mut self) {
        self.board.clear();
        for _ in 0..START_TILES {
            add_new_tile(&mut self.board, &mut self.rng);
        }
        self.score = 0;
        self.moves = 0;
        self.status = GameStatus::Playing;
        debug!(
            "episode {} started on {}x{} board",
            self.episode_id,
            self.size(),
            self.size()
        );
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Apply a player action
    ///
    /// `OpenMenu` is a screen transition owned by the caller and leaves the
    /// session untouched.
    pub fn apply_action(&mut self, action: GameAction) -> MoveOutcome {
        match action {
            GameAction::Move(dir) => self.apply_move(dir),
            GameAction::Restart => {
                self.restart();
                MoveOutcome {
                    changed: true,
                    ..MoveOutcome::default()
                }
            }
            GameAction::OpenMenu => MoveOutcome {
                game_over: self.is_game_over(),
                ..MoveOutcome::default()
            },
        }
    }

    /// Slide the board in `dir`
    ///
    /// A move that leaves the board as it was spawns nothing and skips the
    /// game-over check. Moves are ignored once the game is over.
    pub fn apply_move(&mut self, dir: Direction) -> MoveOutcome {
        if self.is_game_over() {
            return MoveOutcome {
                game_over: true,
                ..MoveOutcome::default()
            };
        }

        let before = self.board;
        let (after, score) = before.apply_move(dir, self.score);
        if after == before {
            return MoveOutcome::default();
        }

        let gained = score - self.score;
        self.board = after;
        self.score = score;
        self.moves = self.moves.wrapping_add(1);

        let spawned = add_new_tile(&mut self.board, &mut self.rng);

        let new_best = self.score > self.best;
        if new_best {
            self.best = self.score;
        }

        if self.board.check_game_over() {
            self.status = GameStatus::GameOver;
            info!(
                "game over: score {} after {} moves, max tile {} (seed {}, episode {})",
                self.score,
                self.moves,
                self.board.max_tile(),
                self.seed,
                self.episode_id
            );
        }

        MoveOutcome {
            changed: true,
            gained,
            spawned,
            game_over: self.is_game_over(),
            new_best,
        }
    }

    /// Fresh board and score 0, keeping size, best score and the RNG stream
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.init();
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        out.size = self.size() as u8;
        for (r, row) in self.board.rows().enumerate() {
            out.board[r][..row.len()].copy_from_slice(row);
        }
        out.score = self.score;
        out.best = self.best;
        out.status = self.status;
        out.moves = self.moves;
        out.episode_id = self.episode_id;
        out.max_tile = self.board.max_tile();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
