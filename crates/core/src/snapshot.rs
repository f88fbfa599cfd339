use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::{PieceKind, GRID_COLS, GRID_ROWS};
use crate::Piece;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation_state: usize,
    pub row_offset: i32,
    pub column_offset: i32,
    pub cells: [Position; 4],
}

impl From<&Piece> for PieceSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind(),
            rotation_state: value.rotation_state(),
            row_offset: value.row_offset(),
            column_offset: value.column_offset(),
            cells: value.cell_positions(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid: [[u8; GRID_COLS]; GRID_ROWS],
    pub active: PieceSnapshot,
    pub next: PieceSnapshot,
    pub score: u32,
    pub game_over: bool,
    pub pool_remaining: usize,
}
