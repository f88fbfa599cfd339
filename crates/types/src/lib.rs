//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! Everything here is plain data: the core logic, the terminal renderer and the
//! input mapping all agree on these definitions.
//!
//! # Grid Dimensions
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//!
//! # Piece Type Ids
//!
//! Every piece kind carries a numeric type id. The id is what the grid stores
//! for an occupied cell, and it doubles as the index into [`CELL_COLORS`].
//!
//! | Kind | Id | Color |
//! |------|----|-------|
//! | L | 1 | green |
//! | J | 2 | red |
//! | I | 3 | orange |
//! | O | 4 | yellow |
//! | S | 5 | purple |
//! | T | 6 | cyan |
//! | Z | 7 | blue |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, GameAction, GRID_COLS, GRID_ROWS};
//!
//! let kind = PieceKind::from_type_id(3).unwrap();
//! assert_eq!(kind, PieceKind::I);
//! assert_eq!(kind.type_id(), 3);
//!
//! let action = GameAction::from_str("rotate").unwrap();
//! assert_eq!(action, GameAction::Rotate);
//!
//! assert_eq!(GRID_ROWS, 20);
//! assert_eq!(GRID_COLS, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Grid height in cells (20 rows)
pub const GRID_ROWS: usize = 20;

/// Grid width in cells (10 columns)
pub const GRID_COLS: usize = 10;

/// Number of distinct piece kinds
pub const NUM_PIECE_KINDS: usize = 7;

/// Cell value of an empty grid cell
pub const EMPTY_CELL: u8 = 0;

/// Edge length of one rendered cell, in pixels
pub const CELL_SIZE: i32 = 30;

/// Default gravity period (one row per 200ms)
pub const DEFAULT_GRAVITY_MS: u32 = 200;

/// Soft drop points awarded for a player-issued move down
pub const SOFT_DROP_POINTS: u32 = 1;

/// Bonus for clearing 1, 2 or 3 rows with a single lock.
///
/// Index = rows cleared. Four rows is not in the table and awards nothing.
pub const LINE_BONUS: [u32; 4] = [0, 100, 300, 500];

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    L,
    J,
    I,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in the order a fresh pool is filled
    pub const ALL: [PieceKind; NUM_PIECE_KINDS] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Numeric id stored in grid cells (1..=7)
    pub const fn type_id(self) -> u8 {
        match self {
            PieceKind::L => 1,
            PieceKind::J => 2,
            PieceKind::I => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::type_id`]
    pub fn from_type_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceKind::L),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::I),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// Player commands understood by the game controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
    Reset,
}

impl GameAction {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "rotate" => Some(GameAction::Rotate),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::Reset => "reset",
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const DARK_GREY: Rgb = Rgb::new(26, 31, 40);
pub const GREEN: Rgb = Rgb::new(47, 230, 23);
pub const RED: Rgb = Rgb::new(232, 18, 18);
pub const ORANGE: Rgb = Rgb::new(226, 116, 17);
pub const YELLOW: Rgb = Rgb::new(237, 234, 4);
pub const PURPLE: Rgb = Rgb::new(166, 0, 247);
pub const CYAN: Rgb = Rgb::new(21, 204, 209);
pub const BLUE: Rgb = Rgb::new(13, 64, 216);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const DARK_BLUE: Rgb = Rgb::new(44, 44, 127);
pub const LIGHT_BLUE: Rgb = Rgb::new(59, 85, 162);

/// Cell colors indexed by cell value: 0 is the empty background, 1-7 are piece ids.
pub const CELL_COLORS: [Rgb; NUM_PIECE_KINDS + 1] =
    [DARK_GREY, GREEN, RED, ORANGE, YELLOW, PURPLE, CYAN, BLUE];

/// Color for a cell value. Unknown values fall back to the background.
pub fn cell_color(value: u8) -> Rgb {
    CELL_COLORS
        .get(value as usize)
        .copied()
        .unwrap_or(DARK_GREY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_ids_round_trip_for_every_kind() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_type_id(kind.type_id()), Some(kind));
        }
        assert_eq!(PieceKind::from_type_id(0), None);
        assert_eq!(PieceKind::from_type_id(8), None);
    }

    #[test]
    fn type_ids_are_distinct_and_index_the_color_table() {
        let mut seen = [false; NUM_PIECE_KINDS + 1];
        for kind in PieceKind::ALL {
            let id = kind.type_id() as usize;
            assert!((1..CELL_COLORS.len()).contains(&id));
            assert!(!seen[id], "duplicate id {}", id);
            seen[id] = true;
        }
    }

    #[test]
    fn cell_color_falls_back_to_background() {
        assert_eq!(cell_color(0), DARK_GREY);
        assert_eq!(cell_color(3), ORANGE);
        assert_eq!(cell_color(200), DARK_GREY);
    }

    #[test]
    fn action_strings() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::MoveDown,
            GameAction::Rotate,
            GameAction::Reset,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(GameAction::from_str("hardDrop"), None);
    }

    #[test]
    fn line_bonus_has_no_four_row_tier() {
        assert_eq!(LINE_BONUS.len(), 4);
        assert_eq!(LINE_BONUS[1] + LINE_BONUS[2] + LINE_BONUS[3], 900);
    }
}
