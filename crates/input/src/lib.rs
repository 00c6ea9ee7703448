//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] during play and
//! [`crate::types::MenuInput`] on the menu screen.

pub mod map;

pub use twenty48_types as types;

pub use map::{map_game_key, map_menu_key, should_quit};
