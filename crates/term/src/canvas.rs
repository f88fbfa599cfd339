//! Pixel-space canvas over a character framebuffer.
//!
//! The core lays the screen out in pixels (30px cells). A terminal cell is
//! taken to be 15px wide and 30px tall, so one board cell becomes two
//! characters side by side.

use blockfall_core::Canvas;

use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{cell_color, Rgb, DARK_GREY, EMPTY_CELL};

/// Horizontal pixels per terminal column
pub const PX_PER_COL: i32 = 15;

/// Vertical pixels per terminal row
pub const PX_PER_ROW: i32 = 30;

/// Pixel size of the whole game screen
pub const SCREEN_PX_W: i32 = 500;
pub const SCREEN_PX_H: i32 = 620;

/// Character size of the whole game screen
pub const SCREEN_COLS: u16 = ((SCREEN_PX_W + PX_PER_COL - 1) / PX_PER_COL) as u16;
pub const SCREEN_ROWS: u16 = ((SCREEN_PX_H + PX_PER_ROW - 1) / PX_PER_ROW) as u16;

/// Character rectangle covered by a pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRect {
    pub col: i32,
    pub row: i32,
    pub width: i32,
    pub height: i32,
}

/// Map a pixel rectangle to terminal cells: top-left truncates, size rounds.
pub fn to_char_rect(x: i32, y: i32, width: i32, height: i32) -> CharRect {
    CharRect {
        col: x.div_euclid(PX_PER_COL),
        row: y.div_euclid(PX_PER_ROW),
        width: ((width + PX_PER_COL / 2) / PX_PER_COL).max(1),
        height: ((height + PX_PER_ROW / 2) / PX_PER_ROW).max(1),
    }
}

/// Canvas that paints into a framebuffer at a character origin.
pub struct PixelCanvas<'a> {
    fb: &'a mut FrameBuffer,
    origin_x: u16,
    origin_y: u16,
}

impl<'a> PixelCanvas<'a> {
    pub fn new(fb: &'a mut FrameBuffer, origin_x: u16, origin_y: u16) -> Self {
        Self {
            fb,
            origin_x,
            origin_y,
        }
    }

    fn paint(&mut self, rect: CharRect, ch: char, style: CellStyle) {
        for dy in 0..rect.height {
            for dx in 0..rect.width {
                let x = self.origin_x as i32 + rect.col + dx;
                let y = self.origin_y as i32 + rect.row + dy;
                if x < 0 || y < 0 || x > u16::MAX as i32 || y > u16::MAX as i32 {
                    continue;
                }
                self.fb.put_char(x as u16, y as u16, ch, style);
            }
        }
    }

    /// Fill a pixel rectangle with a solid color
    pub fn fill_solid(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb) {
        self.paint(to_char_rect(x, y, width, height), ' ', CellStyle::solid(color));
    }

    /// Write text with its top-left at a pixel position
    pub fn put_text(&mut self, x: i32, y: i32, text: &str, style: CellStyle) {
        let rect = to_char_rect(x, y, 1, 1);
        let cx = self.origin_x as i32 + rect.col;
        let cy = self.origin_y as i32 + rect.row;
        if cx < 0 || cy < 0 {
            return;
        }
        self.fb.put_str(cx as u16, cy as u16, text, style);
    }

    /// Write a number with its top-left at a pixel position
    pub fn put_number(&mut self, x: i32, y: i32, value: u32, style: CellStyle) {
        let rect = to_char_rect(x, y, 1, 1);
        let cx = self.origin_x as i32 + rect.col;
        let cy = self.origin_y as i32 + rect.row;
        if cx < 0 || cy < 0 {
            return;
        }
        self.fb.put_u32(cx as u16, cy as u16, value, style);
    }
}

impl Canvas for PixelCanvas<'_> {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color_index: u8) {
        let rect = to_char_rect(x, y, width, height);
        if color_index == EMPTY_CELL {
            let style = CellStyle::plain(Rgb::new(90, 90, 100), DARK_GREY).dim();
            self.paint(rect, '·', style);
        } else {
            let style = CellStyle::plain(cell_color(color_index), DARK_GREY).bold();
            self.paint(rect, '█', style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_cells_map_to_two_columns_without_overlap() {
        for column in 0..10 {
            let rect = to_char_rect(11 + column * 30, 11, 29, 29);
            assert_eq!(rect.col, column * 2);
            assert_eq!(rect.width, 2);
            assert_eq!(rect.height, 1);
        }
        for row in 0..20 {
            assert_eq!(to_char_rect(11, 11 + row * 30, 29, 29).row, row);
        }
    }

    #[test]
    fn screen_fits_a_typical_terminal() {
        assert_eq!(SCREEN_COLS, 34);
        assert_eq!(SCREEN_ROWS, 21);
    }

    #[test]
    fn occupied_cells_paint_in_piece_color() {
        let mut fb = FrameBuffer::new(10, 3);
        let mut canvas = PixelCanvas::new(&mut fb, 1, 1);
        canvas.fill_rect(11, 11, 29, 29, 2);

        let cell = fb.get(1, 1).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, cell_color(2));
        assert_eq!(fb.get(2, 1).unwrap().ch, '█');
        assert_eq!(fb.get(3, 1).unwrap().ch, ' ');
    }
}
