//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and renders into a plain framebuffer that is flushed to the
//! terminal with run-length diffs.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep views pure (snapshot in, framebuffer out) so they can be unit-tested
//! - Size tiles to the terminal (full tiles when they fit, compact otherwise)

pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod renderer;
pub mod theme;

pub use twenty48_core as core;
pub use twenty48_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use menu_view::MenuView;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use theme::Palette;
