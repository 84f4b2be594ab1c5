//! Board geometry, independent of any drawing backend.
//!
//! Coordinates are relative to the board's top-left corner; row grows
//! downwards, column to the right.

use crate::board::{Pos, BOARD_SIZE};

/// Side length of the whole board
#[inline]
pub fn board_extent(cell_size: f32) -> f32 {
    cell_size * BOARD_SIZE as f32
}

/// Cell under a pointer, by floor division with the cell size.
pub fn pointer_to_cell(x: f32, y: f32, cell_size: f32) -> Option<Pos> {
    if cell_size.is_nan() || cell_size <= 0.0 || !x.is_finite() || !y.is_finite() {
        return None;
    }
    let col = (x / cell_size).floor() as i32;
    let row = (y / cell_size).floor() as i32;
    Pos::try_new(row, col)
}

/// Top-left corner of a cell
#[inline]
pub fn cell_origin(pos: Pos, cell_size: f32) -> (f32, f32) {
    (pos.col as f32 * cell_size, pos.row as f32 * cell_size)
}

/// Centre of a cell
#[inline]
pub fn cell_center(pos: Pos, cell_size: f32) -> (f32, f32) {
    let (x, y) = cell_origin(pos, cell_size);
    (x + cell_size * 0.5, y + cell_size * 0.5)
}

/// Largest cell size not above `preferred` that fits a square of `available`
pub fn fit_cell_size(preferred: f32, available: f32) -> f32 {
    preferred.min(available / BOARD_SIZE as f32).max(1.0)
}
