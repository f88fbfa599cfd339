//! Notifications queued by the controller for the outer loop.
//!
//! Audio cues and the event log consume these. Nothing in the core reads them
//! back.

use serde::{Deserialize, Serialize};

use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A rotation was applied (rotate sound)
    RotateAccepted,
    /// The active piece was written into the grid
    Locked { kind: PieceKind },
    /// One lock completed rows (clear sound)
    RowsCleared { count: usize },
    /// The promoted piece does not fit; the game is over
    GameOver,
}
