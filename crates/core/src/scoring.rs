//! Scoring module
//!
//! A lock that clears rows earns a fixed bonus: 100 for one row, 300 for two,
//! 500 for three. Four rows have no entry and earn nothing extra. Soft-drop
//! points are added on top by the caller.

use crate::types::LINE_BONUS;

/// Bonus for clearing `lines` rows with one lock
pub fn line_clear_bonus(lines: usize) -> u32 {
    LINE_BONUS.get(lines).copied().unwrap_or(0)
}

/// Points added to the score for one update
pub fn calculate_score(lines: usize, move_down_points: u32) -> u32 {
    line_clear_bonus(lines).saturating_add(move_down_points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_bonus_table() {
        assert_eq!(line_clear_bonus(0), 0);
        assert_eq!(line_clear_bonus(1), 100);
        assert_eq!(line_clear_bonus(2), 300);
        assert_eq!(line_clear_bonus(3), 500);
    }

    #[test]
    fn test_four_lines_earn_no_bonus() {
        assert_eq!(line_clear_bonus(4), 0);
        assert_eq!(calculate_score(4, 0), 0);
    }

    #[test]
    fn test_move_down_points_are_added() {
        assert_eq!(calculate_score(1, 10), 110);
        assert_eq!(calculate_score(0, 1), 1);
        assert_eq!(calculate_score(2, 5), 305);
    }
}
