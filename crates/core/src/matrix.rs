//! Grid/shape math as free functions
//!
//! These operate on borrowed grids and never allocate. Coordinates are
//! `(row, col)` with row 0 at the top. Columns are bounded on both sides; rows
//! are bounded only at the bottom, so a shape may hang above row 0 (the spawn
//! buffer) without colliding.

use arrayvec::ArrayVec;

use crate::bricks::occupied_cells;
use crate::types::{Grid, ShapeMatrix, BOARD_COLS, BOARD_ROWS};

/// Whether `shape` placed with its top-left at `(row, col)` collides with a wall,
/// the floor, or a locked cell.
pub fn intersects(grid: &Grid, shape: &ShapeMatrix, row: i8, col: i8) -> bool {
    occupied_cells(shape).any(|(dr, dc, _)| {
        let r = row as i32 + dr as i32;
        let c = col as i32 + dc as i32;
        if c < 0 || c >= BOARD_COLS as i32 || r >= BOARD_ROWS as i32 {
            return true;
        }
        // Above the grid is open space.
        r >= 0 && grid[r as usize][c as usize] != 0
    })
}

/// Write the non-empty cells of `shape` into `grid`.
///
/// Empty shape cells never overwrite the grid. Cells that fall outside the grid
/// (above row 0) are dropped.
pub fn merge(grid: &mut Grid, shape: &ShapeMatrix, row: i8, col: i8) {
    for (dr, dc, id) in occupied_cells(shape) {
        let r = row as i32 + dr as i32;
        let c = col as i32 + dc as i32;
        if (0..BOARD_ROWS as i32).contains(&r) && (0..BOARD_COLS as i32).contains(&c) {
            grid[r as usize][c as usize] = id;
        }
    }
}

/// A row is full iff every cell is non-zero.
pub fn is_row_full(grid: &Grid, row: usize) -> bool {
    grid.get(row)
        .map(|cells| cells.iter().all(|&cell| cell != 0))
        .unwrap_or(false)
}

/// Remove every full row, compacting the rest towards the bottom.
///
/// Surviving rows keep their relative order; vacated rows at the top are
/// zeroed. Returns the removed row indices (as they were before removal),
/// ordered top to bottom. Two-pointer pass from the bottom, no allocation.
pub fn clear_full_rows(grid: &mut Grid) -> ArrayVec<usize, BOARD_ROWS> {
    let mut cleared = ArrayVec::new();
    let mut write = BOARD_ROWS;

    for read in (0..BOARD_ROWS).rev() {
        if is_row_full(grid, read) {
            cleared.push(read);
        } else {
            write -= 1;
            if write != read {
                grid[write] = grid[read];
            }
        }
    }

    for row in grid.iter_mut().take(write) {
        *row = [0; BOARD_COLS];
    }

    cleared.reverse();
    cleared
}
