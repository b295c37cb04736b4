//! Collision module - decides whether a piece matrix fits on the board
//!
//! Space above the board (negative y) is treated as open, so pieces can rotate
//! and spawn partly off the top edge. The side walls and the floor always block.

use crate::pieces::ShapeMatrix;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::Board;

/// Returns true if `matrix`, anchored at `anchor` and shifted by `offset`,
/// would overlap a wall, the floor, or a locked cell.
pub fn collides(board: &Board, matrix: &ShapeMatrix, anchor: (i8, i8), offset: (i8, i8)) -> bool {
    let (ax, ay) = (anchor.0 + offset.0, anchor.1 + offset.1);

    matrix.cells().any(|(dx, dy)| {
        let x = ax + dx;
        let y = ay + dy;

        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }

        y >= 0 && board.is_occupied(x, y)
    })
}
