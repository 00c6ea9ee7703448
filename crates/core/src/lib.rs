//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 board engine and session state.
//! It has **no dependencies** on UI, terminals or the file system, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a plain function over a `Copy` board
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free**: Boards are fixed-size arrays; moves never allocate
//!
//! # Module Structure
//!
//! - [`board`]: N×N board, compress/merge/reverse/transpose, the four moves, game-over check
//! - [`spawn`]: random 2/4 tile insertion into empty cells
//! - [`session`]: session state machine (`Playing` / `GameOver`), score and best score
//! - [`snapshot`]: fixed-size copy of a session for rendering
//!
//! # Game Rules
//!
//! - A move slides every tile as far as it goes in one direction
//! - Two equal tiles that meet merge into one of double value, adding it to the score
//! - A tile merges at most once per move (`[2, 2, 2, 2]` left gives `[4, 4, 0, 0]`)
//! - A move that changes nothing is ignored: no tile spawns
//! - Otherwise one tile spawns (2 at 90%, 4 at 10%) in a random empty cell
//! - The game ends when the board is full and no neighbours are equal
//!
//! # Example
//!
//! ```
//! use twenty48_core::{Board, GameSession};
//! use twenty48_types::{Direction, GameAction};
//!
//! let board = Board::from_rows(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
//! let (moved, score) = board.move_left(0);
//! assert_eq!(moved.to_rows()[0], vec![4, 0, 0, 0]);
//! assert_eq!(score, 4);
//!
//! let mut session = GameSession::new(4, 12345, 0);
//! session.apply_action(GameAction::Move(Direction::Left));
//! assert!(!session.is_game_over());
//! ```

pub mod board;
pub mod session;
pub mod snapshot;
pub mod spawn;

pub use twenty48_types as types;

// Re-export commonly used types for convenience
pub use board::{check_game_over, compress, merge, Board};
pub use session::{GameSession, GameStatus, MoveOutcome};
pub use snapshot::GameSnapshot;
pub use spawn::{add_new_tile, spawn_tile_value};
