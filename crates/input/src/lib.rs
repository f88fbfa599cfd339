//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]s. Key repeat
//! and timing are left to the terminal and the game loop.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
