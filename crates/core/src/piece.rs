//! Piece module - the active falling block
//!
//! A piece is a kind, its shared geometry table, a rotation state and a
//! translation. Movement and rotation here are unconditional: the controller
//! applies them speculatively and rolls back when the result collides.

use crate::canvas::{fill_cell, Anchor, Canvas};
use crate::geometry::{geometry, Geometry};
use crate::position::Position;
use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    geometry: &'static Geometry,
    rotation_state: usize,
    row_offset: i32,
    column_offset: i32,
}

impl Piece {
    /// Create a piece in rotation state 0 at its kind's spawn translation
    pub fn new(kind: PieceKind) -> Self {
        let geometry = geometry(kind);
        let spawn = geometry.spawn_offset();
        Self {
            kind,
            geometry,
            rotation_state: 0,
            row_offset: spawn.row,
            column_offset: spawn.column,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Grid cell value and color index of this piece
    pub fn type_id(&self) -> u8 {
        self.kind.type_id()
    }

    pub fn rotation_state(&self) -> usize {
        self.rotation_state
    }

    pub fn row_offset(&self) -> i32 {
        self.row_offset
    }

    pub fn column_offset(&self) -> i32 {
        self.column_offset
    }

    /// Translate by the given deltas. No validation.
    pub fn move_by(&mut self, rows: i32, columns: i32) {
        self.row_offset += rows;
        self.column_offset += columns;
    }

    /// Absolute grid positions of the four cells, in geometry-table order
    pub fn cell_positions(&self) -> [Position; 4] {
        let shape = match self.geometry.offsets_for(self.rotation_state) {
            Ok(shape) => shape,
            Err(e) => panic!("{:?} piece in invalid state: {}", self.kind, e),
        };
        shape.map(|cell| {
            Position::new(cell.row + self.row_offset, cell.column + self.column_offset)
        })
    }

    /// Advance to the next rotation state, wrapping around
    pub fn rotate(&mut self) {
        self.rotation_state = (self.rotation_state + 1) % self.geometry.rotation_count();
    }

    /// Step back one rotation state; undoes a single [`Piece::rotate`]
    pub fn undo_rotation(&mut self) {
        let count = self.geometry.rotation_count();
        self.rotation_state = (self.rotation_state + count - 1) % count;
    }

    /// Draw the cells relative to `anchor`.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, anchor: Anchor) {
        let color = self.type_id();
        for cell in self.cell_positions() {
            fill_cell(canvas, anchor, cell.row, cell.column, color);
        }
    }
}
