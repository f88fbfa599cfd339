//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game and nothing else.
//! It has no dependencies on terminals, audio or timers:
//!
//! - **Deterministic**: the piece pool is driven by a seeded RNG
//! - **Synchronous**: every operation runs to completion; the outer loop decides
//!   when gravity ticks happen
//! - **Headless**: drawing goes through the [`Canvas`] trait and sounds are
//!   queued as [`GameEvent`]s
//!
//! # Module Structure
//!
//! - [`position`]: (row, column) value type
//! - [`geometry`]: static rotation tables for the seven pieces
//! - [`piece`]: the active falling piece
//! - [`grid`]: 20x10 playfield with row clearing and gravity compaction
//! - [`rng`]: piece pool drawn without replacement
//! - [`scoring`]: row-clear bonus table
//! - [`game`]: the controller
//!
//! # Rules
//!
//! - Moves and rotations that leave the grid or overlap a locked cell are undone
//! - Rotation has no wall kicks
//! - A piece locks when a move down fails
//! - Clearing 1/2/3 rows with a single lock scores 100/300/500
//! - The game ends when the promoted piece does not fit at its spawn position
//!
//! # Example
//!
//! ```
//! use blockfall_core::Game;
//! use blockfall_types::GameAction;
//!
//! let mut game = Game::new(12345);
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::MoveDown);
//!
//! // A player move down earns a soft-drop point.
//! assert_eq!(game.score(), 1);
//! assert!(!game.is_game_over());
//! ```

pub mod canvas;
pub mod error;
pub mod events;
pub mod game;
pub mod geometry;
pub mod grid;
pub mod piece;
pub mod position;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use canvas::{preview_anchor, Anchor, Canvas, RecordingCanvas, BOARD_ANCHOR};
pub use error::CoreError;
pub use events::GameEvent;
pub use game::{Game, GameStatus};
pub use geometry::{geometry, Geometry, Shape};
pub use grid::Grid;
pub use piece::Piece;
pub use position::Position;
pub use rng::{PiecePool, SimpleRng};
pub use scoring::{calculate_score, line_clear_bonus};
pub use snapshot::{GameSnapshot, PieceSnapshot};
