//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The board is always square. Its side length is chosen when a session starts:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_BOARD_SIZE` | 2 | Smallest board the engine accepts |
//! | `MAX_BOARD_SIZE` | 8 | Largest board (bounds fixed-size snapshots) |
//! | `MIN_MENU_SIZE` | 3 | Smallest size offered by the menu / CLI |
//! | `DEFAULT_BOARD_SIZE` | 4 | Classic 4x4 |
//!
//! # Tile Spawning
//!
//! After every move that changes the board one tile appears in a random empty
//! cell: a `4` with probability `FOUR_TILE_PROBABILITY` (0.1), otherwise a `2`.
//! A fresh session starts with `START_TILES` (2) spawned tiles.
//!
//! # Examples
//!
//! ```
//! use twenty48_types::{Direction, GameAction, Theme, DEFAULT_BOARD_SIZE};
//!
//! let action = GameAction::Move(Direction::Down);
//! assert_ne!(action, GameAction::Restart);
//!
//! assert_eq!(Theme::Light.toggle(), Theme::Dark);
//! assert_eq!(DEFAULT_BOARD_SIZE, 4);
//! ```

/// A single board cell: 0 is empty, anything else is a power of two >= 2.
pub type Tile = u32;

/// Smallest board side length the engine accepts.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest board side length. Snapshots are sized for this.
pub const MAX_BOARD_SIZE: usize = 8;

/// Total cell capacity of the largest board.
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE;

/// Smallest size offered to players (2x2 is degenerate).
pub const MIN_MENU_SIZE: usize = 3;

/// Classic board side length.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Number of tiles placed on a freshly initialized board.
pub const START_TILES: usize = 2;

/// Probability that a spawned tile is a 4 instead of a 2.
pub const FOUR_TILE_PROBABILITY: f64 = 0.1;

/// Value of the common spawned tile.
pub const TWO_TILE: Tile = 2;

/// Value of the rare spawned tile.
pub const FOUR_TILE: Tile = 4;

/// Directions a move can slide the whole board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

/// Actions a player can apply during a game session
///
/// One action is produced per discrete key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide (and merge) every tile in the given direction
    Move(Direction),
    /// Start a fresh board with score 0 (from playing or game over)
    Restart,
    /// Leave the session and go back to the menu
    OpenMenu,
}

/// Navigation input on the menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Back,
}

/// Rows of the menu screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Size,
    Theme,
    Start,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [MenuItem::Size, MenuItem::Theme, MenuItem::Start, MenuItem::Quit];

    /// Position in [`MenuItem::ALL`].
    pub fn index(&self) -> usize {
        match self {
            MenuItem::Size => 0,
            MenuItem::Theme => 1,
            MenuItem::Start => 2,
            MenuItem::Quit => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Size => "Board",
            MenuItem::Theme => "Theme",
            MenuItem::Start => "START GAME",
            MenuItem::Quit => "Quit",
        }
    }

    /// Next row down, wrapping to the top.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Next row up, wrapping to the bottom.
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Menu selections: highlighted row plus the chosen board size and theme
///
/// Plain data; the behaviour lives in the application's menu dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub selected: MenuItem,
    pub size: usize,
    pub theme: Theme,
}

impl MenuState {
    pub fn new(size: usize, theme: Theme) -> Self {
        Self {
            selected: MenuItem::Start,
            size,
            theme,
        }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, Theme::default())
    }
}

/// Visual theme selected in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Parse theme from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Human-readable label for menus.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Check whether `size` is a board side length the engine accepts.
pub fn is_valid_board_size(size: usize) -> bool {
    (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size)
}
