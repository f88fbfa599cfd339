//! Terminal "game renderer" module.
//!
//! Renders the game into a simple framebuffer that can be flushed to a terminal
//! backend. The core describes frames in pixels; [`canvas::PixelCanvas`]
//! scales them onto character cells (one board cell = two characters).

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use canvas::{to_char_rect, CharRect, PixelCanvas, SCREEN_COLS, SCREEN_ROWS};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
