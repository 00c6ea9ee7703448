//! Terminal 2048 (workspace facade crate).
//!
//! The board engine, input mapping and terminal presentation live in dedicated
//! crates under `crates/`; this package re-exports them as
//! `twenty48::{core,input,term,types}` and adds the application layer:
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | command-line flags and `TWENTY48_*` environment variables |
//! | [`logging`] | optional file logger |
//! | [`highscore`] | best-score file |
//! | [`menu`] | menu dispatch |
//! | [`app`] | menu/game screens and the transitions between them |

pub use twenty48_core as core;
pub use twenty48_input as input;
pub use twenty48_term as term;
pub use twenty48_types as types;

pub mod app;
pub mod config;
pub mod highscore;
pub mod logging;
pub mod menu;
