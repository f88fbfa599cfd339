//! Geometry module - fixed cell offsets for every piece kind and rotation state
//!
//! Each kind owns a static table mapping rotation state `0..K` to the four
//! occupied cells, relative to the piece's translation. The tables are shared
//! read-only by every [`Piece`](crate::Piece) of that kind.
//!
//! `K` depends on symmetry: the O piece has a single state, all others cycle
//! through four. Rotation never adjusts the translation (no wall kicks).

use crate::error::{CoreError, Result};
use crate::position::Position;
use crate::types::PieceKind;

/// The four occupied cells of one rotation state
pub type Shape = [Position; 4];

const fn p(row: i32, column: i32) -> Position {
    Position::new(row, column)
}

/// Rotation table of a single piece kind
#[derive(Debug, PartialEq, Eq)]
pub struct Geometry {
    kind: PieceKind,
    states: &'static [Shape],
    spawn: Position,
}

impl Geometry {
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Number of distinct rotation states (`K`)
    pub fn rotation_count(&self) -> usize {
        self.states.len()
    }

    /// Cell offsets for a rotation state
    pub fn offsets_for(&self, rotation_state: usize) -> Result<&'static Shape> {
        self.states
            .get(rotation_state)
            .ok_or(CoreError::RotationOutOfRange {
                state: rotation_state,
                count: self.states.len(),
            })
    }

    /// Translation applied to a freshly created piece
    pub fn spawn_offset(&self) -> Position {
        self.spawn
    }
}

static L_GEOMETRY: Geometry = Geometry {
    kind: PieceKind::L,
    states: &[
        [p(0, 2), p(1, 0), p(1, 1), p(1, 2)],
        [p(0, 1), p(1, 1), p(2, 1), p(2, 2)],
        [p(1, 0), p(1, 1), p(1, 2), p(2, 0)],
        [p(0, 0), p(0, 1), p(1, 1), p(2, 1)],
    ],
    spawn: p(0, 3),
};

static J_GEOMETRY: Geometry = Geometry {
    kind: PieceKind::J,
    states: &[
        [p(0, 0), p(1, 0), p(1, 1), p(1, 2)],
        [p(0, 1), p(0, 2), p(1, 1), p(2, 1)],
        [p(1, 0), p(1, 1), p(1, 2), p(2, 2)],
        [p(0, 1), p(1, 1), p(2, 0), p(2, 1)],
    ],
    spawn: p(0, 3),
};

// Spawns one row up so the horizontal state sits on row 0.
static I_GEOMETRY: Geometry = Geometry {
    kind: PieceKind::I,
    states: &[
        [p(1, 0), p(1, 1), p(1, 2), p(1, 3)],
        [p(0, 2), p(1, 2), p(2, 2), p(3, 2)],
        [p(2, 0), p(2, 1), p(2, 2), p(2, 3)],
        [p(0, 1), p(1, 1), p(2, 1), p(3, 1)],
    ],
    spawn: p(-1, 3),
};

static O_GEOMETRY: Geometry = Geometry {
    kind: PieceKind::O,
    states: &[[p(0, 0), p(0, 1), p(1, 0), p(1, 1)]],
    spawn: p(0, 4),
};

static S_GEOMETRY: Geometry = Geometry {
    kind: PieceKind::S,
    states: &[
        [p(0, 1), p(0, 2), p(1, 0), p(1, 1)],
        [p(0, 1), p(1, 1), p(1, 2), p(2, 2)],
        [p(1, 1), p(1, 2), p(2, 0), p(2, 1)],
        [p(0, 0), p(1, 0), p(1, 1), p(2, 1)],
    ],
    spawn: p(0, 3),
};

static T_GEOMETRY: Geometry = Geometry {
    kind: PieceKind::T,
    states: &[
        [p(0, 1), p(1, 0), p(1, 1), p(1, 2)],
        [p(0, 1), p(1, 1), p(1, 2), p(2, 1)],
        [p(1, 0), p(1, 1), p(1, 2), p(2, 1)],
        [p(0, 1), p(1, 0), p(1, 1), p(2, 1)],
    ],
    spawn: p(0, 3),
};

static Z_GEOMETRY: Geometry = Geometry {
    kind: PieceKind::Z,
    states: &[
        [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
        [p(0, 2), p(1, 1), p(1, 2), p(2, 1)],
        [p(1, 0), p(1, 1), p(2, 1), p(2, 2)],
        [p(0, 1), p(1, 0), p(1, 1), p(2, 0)],
    ],
    spawn: p(0, 3),
};

/// Get the shared geometry table for a piece kind
pub fn geometry(kind: PieceKind) -> &'static Geometry {
    match kind {
        PieceKind::L => &L_GEOMETRY,
        PieceKind::J => &J_GEOMETRY,
        PieceKind::I => &I_GEOMETRY,
        PieceKind::O => &O_GEOMETRY,
        PieceKind::S => &S_GEOMETRY,
        PieceKind::T => &T_GEOMETRY,
        PieceKind::Z => &Z_GEOMETRY,
    }
}
