//! Grid module - the playfield
//!
//! The grid is a 20x10 matrix of cell values: 0 is empty, anything else is the
//! type id of the piece that was locked there. Storage is a flat row-major array.
//! Coordinates are (row, column) with row 0 at the top.

use std::fmt;

use crate::canvas::{fill_cell, Anchor, Canvas};
use crate::error::{CoreError, Result};
use crate::types::{EMPTY_CELL, GRID_COLS, GRID_ROWS};

/// Total number of cells on the grid
const GRID_SIZE: usize = GRID_ROWS * GRID_COLS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * GRID_COLS + column)
    cells: [u8; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [EMPTY_CELL; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: i32, column: i32) -> Option<usize> {
        if row < 0 || row >= GRID_ROWS as i32 || column < 0 || column >= GRID_COLS as i32 {
            return None;
        }
        Some((row as usize) * GRID_COLS + (column as usize))
    }

    #[inline(always)]
    fn checked_index(row: i32, column: i32) -> Result<usize> {
        Self::index(row, column).ok_or(CoreError::OutOfBounds { row, column })
    }

    pub fn num_rows(&self) -> usize {
        GRID_ROWS
    }

    pub fn num_cols(&self) -> usize {
        GRID_COLS
    }

    /// True iff the coordinate addresses a cell of the grid
    pub fn is_inside(&self, row: i32, column: i32) -> bool {
        Self::index(row, column).is_some()
    }

    /// True iff the cell holds no piece. Out-of-grid coordinates are an error.
    pub fn is_empty(&self, row: i32, column: i32) -> Result<bool> {
        Ok(self.cells[Self::checked_index(row, column)?] == EMPTY_CELL)
    }

    /// Read a cell value
    pub fn cell(&self, row: i32, column: i32) -> Result<u8> {
        Ok(self.cells[Self::checked_index(row, column)?])
    }

    /// Write a cell value
    pub fn set(&mut self, row: i32, column: i32, value: u8) -> Result<()> {
        let idx = Self::checked_index(row, column)?;
        self.cells[idx] = value;
        Ok(())
    }

    fn checked_row(row: usize) -> Result<usize> {
        if row < GRID_ROWS {
            Ok(row)
        } else {
            Err(CoreError::RowOutOfBounds { row })
        }
    }

    // Callers pass rows already known to be on the grid.
    fn span(row: usize) -> std::ops::Range<usize> {
        let start = row * GRID_COLS;
        start..start + GRID_COLS
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> Result<&[u8]> {
        Ok(&self.cells[Self::span(Self::checked_row(row)?)])
    }

    fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(GRID_COLS)
    }

    /// Check if every cell of a row is occupied
    pub fn is_row_full(&self, row: usize) -> Result<bool> {
        Ok(self.full_at(Self::checked_row(row)?))
    }

    /// Empty every cell of a row
    pub fn clear_row(&mut self, row: usize) -> Result<()> {
        self.clear_at(Self::checked_row(row)?);
        Ok(())
    }

    /// Copy `row` into `row + num_rows` and empty `row`.
    ///
    /// Both rows must lie on the grid.
    pub fn move_row_down(&mut self, row: usize, num_rows: usize) -> Result<()> {
        let src = Self::checked_row(row)?;
        let dest = Self::checked_row(row.saturating_add(num_rows))?;
        self.shift_at(src, dest);
        Ok(())
    }

    fn full_at(&self, row: usize) -> bool {
        self.cells[Self::span(row)].iter().all(|&cell| cell != EMPTY_CELL)
    }

    fn clear_at(&mut self, row: usize) {
        self.cells[Self::span(row)].fill(EMPTY_CELL);
    }

    fn shift_at(&mut self, src: usize, dest: usize) {
        if src == dest {
            return;
        }
        self.cells.copy_within(Self::span(src), dest * GRID_COLS);
        self.clear_at(src);
    }

    /// Clear every full row and let the rows above fall into the gap.
    ///
    /// One pass from the bottom row up to row 1: a full row is emptied and
    /// counted, any other row drops by the number of full rows found below it.
    /// Row 0 is never visited. Returns the number of rows cleared.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut completed = 0;
        for row in (1..GRID_ROWS).rev() {
            if self.full_at(row) {
                self.clear_at(row);
                completed += 1;
            } else if completed > 0 {
                // `completed` rows below were scanned, so the destination is on the grid.
                self.shift_at(row, row + completed);
            }
        }
        completed
    }

    /// Empty the whole grid
    pub fn reset(&mut self) {
        self.cells.fill(EMPTY_CELL);
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY_CELL).count()
    }

    /// Write the grid into a fixed 2D array, used by snapshots.
    pub fn write_u8_grid(&self, out: &mut [[u8; GRID_COLS]; GRID_ROWS]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Draw every cell, empty ones included, relative to `anchor`.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, anchor: Anchor) {
        for (row, cells) in self.rows().enumerate() {
            for (column, &value) in cells.iter().enumerate() {
                fill_cell(canvas, anchor, row as i32, column as i32, value);
            }
        }
    }

    /// Create from a 2D array, for tests and fixtures
    pub fn from_rows(rows: [[u8; GRID_COLS]; GRID_ROWS]) -> Self {
        let mut grid = Self::new();
        for (dst, src) in grid.cells.chunks_exact_mut(GRID_COLS).zip(rows.iter()) {
            dst.copy_from_slice(src);
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in self.rows() {
            for (column, value) in cells.iter().enumerate() {
                if column > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
