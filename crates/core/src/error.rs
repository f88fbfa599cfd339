//! Errors raised by bounds-checked core queries.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// A geometry lookup asked for a rotation state the piece does not have.
    RotationOutOfRange { state: usize, count: usize },
    /// A grid query addressed a cell outside the grid.
    OutOfBounds { row: i32, column: i32 },
    /// A row operation addressed a row outside the grid.
    RowOutOfBounds { row: usize },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::RotationOutOfRange { state, count } => {
                write!(f, "rotation state {} out of range (piece has {})", state, count)
            }
            CoreError::OutOfBounds { row, column } => {
                write!(f, "cell ({}, {}) is outside the grid", row, column)
            }
            CoreError::RowOutOfBounds { row } => write!(f, "row {} is outside the grid", row),
        }
    }
}

impl Error for CoreError {}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let e = CoreError::RotationOutOfRange { state: 4, count: 4 };
        assert_eq!(e.to_string(), "rotation state 4 out of range (piece has 4)");

        let e = CoreError::OutOfBounds { row: -1, column: 3 };
        assert_eq!(e.to_string(), "cell (-1, 3) is outside the grid");

        let e = CoreError::RowOutOfBounds { row: 25 };
        assert_eq!(e.to_string(), "row 25 is outside the grid");
    }
}
