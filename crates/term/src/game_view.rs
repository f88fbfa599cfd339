//! GameView: maps a `core::Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, in pixels (see [`crate::canvas`] for the pixel to character scale):
//! the board at (11, 11), a "Score" box at (320, 55) and a "Next" box at
//! (320, 215) on the right, and a "GAME OVER" label under the boxes.

use crate::canvas::{PixelCanvas, SCREEN_COLS, SCREEN_PX_H, SCREEN_PX_W, SCREEN_ROWS};
use crate::core::Game;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{DARK_BLUE, LIGHT_BLUE, WHITE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Pixel rectangles of the side panel
const SCORE_LABEL: (i32, i32) = (365, 20);
const NEXT_LABEL: (i32, i32) = (375, 180);
const GAME_OVER_LABEL: (i32, i32) = (320, 450);
const SCORE_BOX: (i32, i32, i32, i32) = (320, 55, 170, 60);
const NEXT_BOX: (i32, i32, i32, i32) = (320, 215, 170, 180);

/// A lightweight terminal renderer for the game screen.
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Character position of the screen's top-left corner inside `viewport`
    pub fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let x = viewport.width.saturating_sub(SCREEN_COLS) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(SCREEN_ROWS) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Render the current game into an existing framebuffer.
    ///
    /// The framebuffer is resized to the viewport and reused across frames.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let (origin_x, origin_y) = self.origin(viewport);
        let mut canvas = PixelCanvas::new(fb, origin_x, origin_y);

        canvas.fill_solid(0, 0, SCREEN_PX_W, SCREEN_PX_H, DARK_BLUE);

        let label = CellStyle::plain(WHITE, DARK_BLUE).bold();
        canvas.put_text(SCORE_LABEL.0, SCORE_LABEL.1, "Score", label);
        canvas.put_text(NEXT_LABEL.0, NEXT_LABEL.1, "Next", label);
        if game.is_game_over() {
            canvas.put_text(GAME_OVER_LABEL.0, GAME_OVER_LABEL.1, "GAME OVER", label);
        }

        let (x, y, w, h) = SCORE_BOX;
        canvas.fill_solid(x, y, w, h, LIGHT_BLUE);
        let (x, y, w, h) = NEXT_BOX;
        canvas.fill_solid(x, y, w, h, LIGHT_BLUE);

        let value = CellStyle::plain(WHITE, LIGHT_BLUE).bold();
        let score = game.score();
        let digits = digit_count(score) as i32;
        let (x, y, w, h) = SCORE_BOX;
        canvas.put_number(
            x + (w - digits * crate::canvas::PX_PER_COL) / 2,
            y + (h - crate::canvas::PX_PER_ROW) / 2,
            score,
            value,
        );

        game.draw(&mut canvas);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }
}

fn digit_count(mut n: u32) -> u32 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count_boundaries() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(4_294_967_295), 10);
    }

    #[test]
    fn origin_centers_screen() {
        let view = GameView::default();
        assert_eq!(view.origin(Viewport::new(80, 25)), ((80 - 34) / 2, (25 - 21) / 2));
        assert_eq!(view.origin(Viewport::new(10, 10)), (0, 0));

        let top = GameView::default().with_anchor_y(AnchorY::Top);
        assert_eq!(top.origin(Viewport::new(80, 25)).1, 0);
    }
}
