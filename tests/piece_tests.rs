//! Piece tests - geometry, rotation, translation

use std::collections::HashSet;

use proptest::prelude::*;

use blockfall::core::{geometry, Grid, Piece};
use blockfall::types::PieceKind;

fn any_kind() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

#[test]
fn test_every_state_has_four_distinct_cells() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind);
        for _ in 0..geometry(kind).rotation_count() {
            let cells: HashSet<_> = piece.cell_positions().into_iter().collect();
            assert_eq!(cells.len(), 4, "{:?} state {}", kind, piece.rotation_state());
            piece.rotate();
        }
    }
}

#[test]
fn test_rotate_then_undo_restores_every_state() {
    for kind in PieceKind::ALL {
        let count = geometry(kind).rotation_count();
        let mut piece = Piece::new(kind);
        for start in 0..count {
            assert_eq!(piece.rotation_state(), start);
            let before = piece;
            piece.rotate();
            piece.undo_rotation();
            assert_eq!(piece, before);
            piece.rotate();
        }
    }
}

#[test]
fn test_full_cycle_returns_to_spawn_state() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind);
        let spawn = piece;
        for _ in 0..geometry(kind).rotation_count() {
            piece.rotate();
        }
        assert_eq!(piece, spawn);
    }
}

#[test]
fn test_spawn_position_is_inside_an_empty_grid() {
    let grid = Grid::new();
    for kind in PieceKind::ALL {
        for cell in Piece::new(kind).cell_positions() {
            assert!(grid.is_inside(cell.row, cell.column), "{:?}", kind);
            assert_eq!(grid.is_empty(cell.row, cell.column), Ok(true));
        }
    }
}

#[test]
fn test_cell_positions_follow_table_order() {
    let mut piece = Piece::new(PieceKind::L);
    piece.rotate();
    let table = geometry(PieceKind::L).offsets_for(1).unwrap();
    for (cell, offset) in piece.cell_positions().iter().zip(table.iter()) {
        assert_eq!(cell.row, offset.row + piece.row_offset());
        assert_eq!(cell.column, offset.column + piece.column_offset());
    }
}

proptest! {
    #[test]
    fn move_then_inverse_restores_offsets(
        kind in any_kind(),
        rows in -1000i32..1000,
        columns in -1000i32..1000,
    ) {
        let mut piece = Piece::new(kind);
        let before = piece;
        piece.move_by(rows, columns);
        piece.move_by(-rows, -columns);
        prop_assert_eq!(piece, before);
    }

    #[test]
    fn rotation_state_stays_in_range(
        kind in any_kind(),
        ops in prop::collection::vec(any::<bool>(), 0..40),
    ) {
        let mut piece = Piece::new(kind);
        let count = geometry(kind).rotation_count();
        for forward in ops {
            if forward {
                piece.rotate();
            } else {
                piece.undo_rotation();
            }
            prop_assert!(piece.rotation_state() < count);
            prop_assert_eq!(piece.cell_positions().len(), 4);
        }
    }
}
