//! Brick catalog - authored rotation states for the seven kinds
//!
//! Rotation is a table lookup, not a geometric transform: rotating forward means
//! advancing to the next matrix in the list for that kind, wrapping around.
//! The visual rotation direction is whatever order the states are authored in.
//!
//! Matrices are indexed `[row][col]` and map straight onto the grid:
//! shape cell `(r, c)` lands on grid cell `(origin_row + r, origin_col + c)`.

use crate::types::{BrickKind, ShapeMatrix};

const I_SHAPES: [ShapeMatrix; 4] = [
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0]],
    [[0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
];

const J_SHAPES: [ShapeMatrix; 4] = [
    [[0, 0, 0, 0], [2, 2, 2, 0], [0, 0, 2, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [0, 2, 2, 0], [0, 2, 0, 0], [0, 2, 0, 0]],
    [[0, 0, 0, 0], [0, 2, 0, 0], [0, 2, 2, 2], [0, 0, 0, 0]],
    [[0, 0, 2, 0], [0, 0, 2, 0], [0, 2, 2, 0], [0, 0, 0, 0]],
];

const L_SHAPES: [ShapeMatrix; 4] = [
    [[0, 0, 0, 0], [0, 3, 3, 3], [0, 3, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [0, 3, 3, 0], [0, 0, 3, 0], [0, 0, 3, 0]],
    [[0, 0, 0, 0], [0, 0, 3, 0], [3, 3, 3, 0], [0, 0, 0, 0]],
    [[0, 3, 0, 0], [0, 3, 0, 0], [0, 3, 3, 0], [0, 0, 0, 0]],
];

const O_SHAPES: [ShapeMatrix; 1] = [[[0, 0, 0, 0], [0, 4, 4, 0], [0, 4, 4, 0], [0, 0, 0, 0]]];

const S_SHAPES: [ShapeMatrix; 2] = [
    [[0, 0, 0, 0], [0, 5, 5, 0], [5, 5, 0, 0], [0, 0, 0, 0]],
    [[5, 0, 0, 0], [5, 5, 0, 0], [0, 5, 0, 0], [0, 0, 0, 0]],
];

const T_SHAPES: [ShapeMatrix; 4] = [
    [[0, 0, 0, 0], [6, 6, 6, 0], [0, 6, 0, 0], [0, 0, 0, 0]],
    [[0, 6, 0, 0], [0, 6, 6, 0], [0, 6, 0, 0], [0, 0, 0, 0]],
    [[0, 6, 0, 0], [6, 6, 6, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 6, 0, 0], [6, 6, 0, 0], [0, 6, 0, 0], [0, 0, 0, 0]],
];

const Z_SHAPES: [ShapeMatrix; 2] = [
    [[0, 0, 0, 0], [7, 7, 0, 0], [0, 7, 7, 0], [0, 0, 0, 0]],
    [[0, 7, 0, 0], [7, 7, 0, 0], [7, 0, 0, 0], [0, 0, 0, 0]],
];

/// Ordered rotation states for a kind.
pub fn rotations(kind: BrickKind) -> &'static [ShapeMatrix] {
    match kind {
        BrickKind::I => &I_SHAPES,
        BrickKind::J => &J_SHAPES,
        BrickKind::L => &L_SHAPES,
        BrickKind::O => &O_SHAPES,
        BrickKind::S => &S_SHAPES,
        BrickKind::T => &T_SHAPES,
        BrickKind::Z => &Z_SHAPES,
    }
}

/// Number of distinct rotation states (1, 2 or 4).
pub fn rotation_count(kind: BrickKind) -> usize {
    rotations(kind).len()
}

/// Shape matrix for a rotation index.
///
/// # Panics
///
/// Panics if `rotation` is not a valid index for `kind`. An out-of-range index
/// means an `ActivePiece` was built or mutated incorrectly.
pub fn shape(kind: BrickKind, rotation: usize) -> &'static ShapeMatrix {
    let states = rotations(kind);
    assert!(
        rotation < states.len(),
        "rotation index {} out of range for {:?} ({} states)",
        rotation,
        kind,
        states.len()
    );
    &states[rotation]
}

/// Spawn orientation (first rotation state).
pub fn spawn_shape(kind: BrickKind) -> &'static ShapeMatrix {
    &rotations(kind)[0]
}

/// Index of the next rotation state, wrapping modulo the state count.
pub fn next_rotation(kind: BrickKind, rotation: usize) -> usize {
    (rotation + 1) % rotation_count(kind)
}

/// Iterate the non-empty cells of a shape as `(row, col, id)`.
pub fn occupied_cells(shape: &ShapeMatrix) -> impl Iterator<Item = (i8, i8, u8)> + '_ {
    shape.iter().enumerate().flat_map(|(r, row)| {
        row.iter()
            .enumerate()
            .filter(|&(_, &id)| id != 0)
            .map(move |(c, &id)| (r as i8, c as i8, id))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_counts_follow_symmetry() {
        assert_eq!(rotation_count(BrickKind::O), 1);
        assert_eq!(rotation_count(BrickKind::S), 2);
        assert_eq!(rotation_count(BrickKind::Z), 2);
        for kind in [BrickKind::I, BrickKind::J, BrickKind::L, BrickKind::T] {
            assert_eq!(rotation_count(kind), 4, "{:?}", kind);
        }
    }

    #[test]
    fn every_state_has_four_cells_of_the_kind_color() {
        for kind in BrickKind::ALL {
            for state in rotations(kind) {
                let cells: Vec<_> = occupied_cells(state).collect();
                assert_eq!(cells.len(), 4, "{:?}", kind);
                assert!(cells.iter().all(|&(_, _, id)| id == kind.color_id()));
            }
        }
    }

    #[test]
    fn next_rotation_wraps() {
        assert_eq!(next_rotation(BrickKind::T, 3), 0);
        assert_eq!(next_rotation(BrickKind::S, 1), 0);
        assert_eq!(next_rotation(BrickKind::O, 0), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn shape_rejects_invalid_rotation_index() {
        let _ = shape(BrickKind::O, 1);
    }
}
