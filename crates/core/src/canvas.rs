//! Rendering collaborator interface.
//!
//! The core never draws anything itself. It describes each frame as a series of
//! filled rectangles in pixel space, keyed by color index (cell value), and a
//! [`Canvas`] implementation decides what a pixel means on its output device.

use crate::types::{PieceKind, CELL_SIZE};

/// Receives filled-rectangle draw requests.
pub trait Canvas {
    /// Fill a `width` x `height` rectangle with the top-left corner at (`x`, `y`).
    /// `color_index` indexes [`crate::types::CELL_COLORS`].
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color_index: u8);
}

/// Pixel origin that board-relative cell coordinates are drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub x: i32,
    pub y: i32,
}

impl Anchor {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Top-left of the play field
pub const BOARD_ANCHOR: Anchor = Anchor::new(11, 11);

/// Where the lookahead piece is drawn. Wide and square pieces are shifted so
/// every kind looks centred in the preview box.
pub fn preview_anchor(kind: PieceKind) -> Anchor {
    match kind {
        PieceKind::I => Anchor::new(255, 290),
        PieceKind::O => Anchor::new(255, 280),
        PieceKind::L | PieceKind::J | PieceKind::S | PieceKind::T | PieceKind::Z => {
            Anchor::new(270, 270)
        }
    }
}

/// Draw one grid cell. The rectangle is one pixel short of the cell size so a
/// grid line shows between neighbours.
pub(crate) fn fill_cell<C: Canvas + ?Sized>(
    canvas: &mut C,
    anchor: Anchor,
    row: i32,
    column: i32,
    color_index: u8,
) {
    canvas.fill_rect(
        anchor.x + column * CELL_SIZE,
        anchor.y + row * CELL_SIZE,
        CELL_SIZE - 1,
        CELL_SIZE - 1,
        color_index,
    );
}

/// Canvas that records every request; handy for tests and headless runs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingCanvas {
    pub rects: Vec<(i32, i32, i32, i32, u8)>,
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color_index: u8) {
        self.rects.push((x, y, width, height, color_index));
    }
}
