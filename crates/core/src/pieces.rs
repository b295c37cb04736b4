//! Pieces module - tetromino shape matrices and the rotation transform
//!
//! Every piece is a small square matrix (4x4 for I, 2x2 for O, 3x3 for the rest).
//! Orientation is the number of clockwise quarter turns applied to the canonical
//! matrix. Rotation happens inside the matrix, so the anchor (top-left corner)
//! stays put and only the occupied sub-cells move.

use crate::types::{PieceKind, Rotation};

/// Largest matrix side (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Direction of a quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
}

/// An N×N occupancy matrix, `N <= 4`. Rows are indexed by y, columns by x.
///
/// Only the top-left `size × size` block is meaningful; everything outside it
/// is always empty, so derived equality compares shapes correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: u8,
    rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// Build from rows of 0/1 values. Panics on non-square input or size > 4.
    pub const fn from_rows<const N: usize>(src: [[u8; N]; N]) -> Self {
        assert!(N <= MAX_SHAPE_SIZE);
        let mut rows = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut y = 0;
        while y < N {
            let mut x = 0;
            while x < N {
                rows[y][x] = src[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Self { size: N as u8, rows }
    }

    /// Side length of the matrix.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Occupied sub-cells as (x, y) offsets from the anchor, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| self.rows[y][x].then_some((x as i8, y as i8)))
        })
    }

    /// Transpose, then reverse each row (clockwise) or the row order (counter-clockwise).
    pub fn rotate(&self, turn: Turn) -> Self {
        let n = self.size();
        let mut transposed = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in transposed.iter_mut().enumerate().take(n) {
            for (x, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.rows[x][y];
            }
        }

        let mut rows = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for y in 0..n {
            for x in 0..n {
                rows[y][x] = match turn {
                    Turn::Clockwise => transposed[y][n - 1 - x],
                    Turn::CounterClockwise => transposed[n - 1 - y][x],
                };
            }
        }

        Self {
            size: self.size,
            rows,
        }
    }
}

const I_SHAPE: ShapeMatrix =
    ShapeMatrix::from_rows([[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]]);
const J_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[0, 1, 0], [0, 1, 0], [1, 1, 0]]);
const L_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[0, 1, 0], [0, 1, 0], [0, 1, 1]]);
const O_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[1, 1], [1, 1]]);
const S_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]);
const T_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[1, 1, 1], [0, 1, 0], [0, 0, 0]]);
const Z_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[1, 1, 0], [0, 1, 1], [0, 0, 0]]);

/// Spawn-orientation matrix for a piece kind
pub fn canonical_shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Matrix for a kind at a given orientation: the canonical shape turned
/// clockwise `rotation.index()` times. Pure; callers may cache freely.
pub fn current_matrix(kind: PieceKind, rotation: Rotation) -> ShapeMatrix {
    let mut matrix = canonical_shape(kind);
    for _ in 0..rotation.index() {
        matrix = matrix.rotate(Turn::Clockwise);
    }
    matrix
}

/// Horizontal offsets tried, in order, when a rotated piece collides:
/// 0, +1, -1, +2, -2, ... up to `MAX_KICK`.
///
/// This is a plain sideways nudge, not the SRS kick tables.
pub fn kick_offsets() -> impl Iterator<Item = i8> {
    std::iter::once(0).chain((1..=crate::types::MAX_KICK).flat_map(|d| [d, -d]))
}
