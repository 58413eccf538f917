//! Board module - the grid plus the active piece
//!
//! The grid is 25 rows x 10 columns stored as a fixed array (no allocation).
//! Row 0 is the top; rows 0 and 1 are the hidden spawn buffer. The active piece
//! is placed by the top-left corner of its 4x4 shape matrix.
//!
//! Every operation that moves the active piece either commits a collision-free
//! placement or leaves the piece untouched and returns `false`.

use arrayvec::ArrayVec;

use crate::bricks;
use crate::matrix::{clear_full_rows, intersects, merge};
use crate::scoring::line_clear_bonus;
use crate::types::{BrickKind, Grid, ShapeMatrix, BOARD_COLS, BOARD_ROWS, SPAWN_COL, SPAWN_ROW};

/// Offsets tried in order when a rotation collides, as `(d_row, d_col)`:
/// in place, one right, one left, one up, two right.
pub const ROTATION_KICKS: [(i8, i8); 5] = [(0, 0), (0, 1), (0, -1), (-1, 0), (0, 2)];

/// The falling, not-yet-locked piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: BrickKind,
    /// Index into [`bricks::rotations`] for `kind`.
    pub rotation: usize,
    pub row: i8,
    pub col: i8,
}

impl ActivePiece {
    /// A piece in its first rotation state at the spawn origin.
    pub fn spawn(kind: BrickKind) -> Self {
        Self {
            kind,
            rotation: 0,
            row: SPAWN_ROW,
            col: SPAWN_COL,
        }
    }

    pub fn shape(&self) -> &'static ShapeMatrix {
        bricks::shape(self.kind, self.rotation)
    }

    /// Grid coordinates `(row, col)` of the occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        bricks::occupied_cells(self.shape()).map(move |(dr, dc, _)| (self.row + dr, self.col + dc))
    }
}

/// Outcome of clearing lines after a lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearResult {
    pub lines_removed: u32,
    /// Grid after compaction.
    pub grid: Grid,
    pub score_bonus: u32,
    /// Removed row indices, top to bottom, as they were before removal.
    pub cleared_rows: ArrayVec<usize, BOARD_ROWS>,
}

/// Locked cells and the active piece.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid: Grid,
    active: Option<ActivePiece>,
}

impl Board {
    /// Create an empty board with no active piece.
    pub fn new() -> Self {
        Self {
            grid: [[0; BOARD_COLS]; BOARD_ROWS],
            active: None,
        }
    }

    /// Build a board from an existing grid (puzzle setups, tests).
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid, active: None }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    /// Cell value at `(row, col)`, `None` when out of bounds.
    pub fn cell(&self, row: i8, col: i8) -> Option<u8> {
        if row < 0 || col < 0 {
            return None;
        }
        self.grid
            .get(row as usize)
            .and_then(|cells| cells.get(col as usize))
            .copied()
    }

    /// Overwrite a locked cell. Returns false if out of bounds.
    pub fn set_cell(&mut self, row: i8, col: i8, value: u8) -> bool {
        if row < 0 || col < 0 || row as usize >= BOARD_ROWS || col as usize >= BOARD_COLS {
            return false;
        }
        self.grid[row as usize][col as usize] = value;
        true
    }

    /// Empty the grid and drop the active piece.
    pub fn reset(&mut self) {
        self.grid = [[0; BOARD_COLS]; BOARD_ROWS];
        self.active = None;
    }

    /// Place a fresh piece at the spawn origin.
    ///
    /// Returns true if the spawn placement already collides (the game-over
    /// signal). The piece is placed either way so it can still be rendered.
    pub fn spawn(&mut self, kind: BrickKind) -> bool {
        let piece = ActivePiece::spawn(kind);
        let blocked = intersects(&self.grid, piece.shape(), piece.row, piece.col);
        self.active = Some(piece);
        blocked
    }

    /// Whether the active piece could sit at `(row, col)` with `rotation`.
    fn fits(&self, kind: BrickKind, rotation: usize, row: i8, col: i8) -> bool {
        !intersects(&self.grid, bricks::shape(kind, rotation), row, col)
    }

    /// Shift the active piece. Returns false (state unchanged) on collision or
    /// when there is no active piece.
    pub fn try_move(&mut self, d_row: i8, d_col: i8) -> bool {
        let Some(piece) = self.active else {
            return false;
        };

        let row = piece.row + d_row;
        let col = piece.col + d_col;
        if !self.fits(piece.kind, piece.rotation, row, col) {
            return false;
        }

        self.active = Some(ActivePiece { row, col, ..piece });
        true
    }

    /// Advance to the next rotation state, trying [`ROTATION_KICKS`] in order.
    ///
    /// The first collision-free offset commits both the new rotation and the
    /// shifted origin. If every offset collides nothing changes.
    pub fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.active else {
            return false;
        };

        let rotation = bricks::next_rotation(piece.kind, piece.rotation);
        for &(d_row, d_col) in ROTATION_KICKS.iter() {
            let row = piece.row + d_row;
            let col = piece.col + d_col;
            if self.fits(piece.kind, rotation, row, col) {
                self.active = Some(ActivePiece {
                    rotation,
                    row,
                    col,
                    ..piece
                });
                return true;
            }
        }

        false
    }

    /// Move down until blocked. Returns the number of rows travelled.
    pub fn drop_to_floor(&mut self) -> u32 {
        let mut rows = 0;
        while self.try_move(1, 0) {
            rows += 1;
        }
        rows
    }

    /// Merge the active piece into the grid and discard it.
    pub fn lock_piece(&mut self) {
        if let Some(piece) = self.active.take() {
            merge(&mut self.grid, piece.shape(), piece.row, piece.col);
        }
    }

    /// Remove full rows and compact the grid.
    pub fn clear_lines(&mut self) -> ClearResult {
        let cleared_rows = clear_full_rows(&mut self.grid);
        let lines_removed = cleared_rows.len() as u32;
        ClearResult {
            lines_removed,
            grid: self.grid,
            score_bonus: line_clear_bonus(lines_removed),
            cleared_rows,
        }
    }

    /// Row the active piece would land on if dropped straight down.
    pub fn ghost_row(&self) -> Option<i8> {
        let piece = self.active?;
        let mut row = piece.row;
        while self.fits(piece.kind, piece.rotation, row + 1, piece.col) {
            row += 1;
        }
        Some(row)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(kind: BrickKind) -> Board {
        let mut board = Board::new();
        assert!(!board.spawn(kind));
        board
    }

    #[test]
    fn test_spawn_places_first_rotation_at_origin() {
        let board = board_with(BrickKind::T);
        let piece = board.active().unwrap();
        assert_eq!(piece.rotation, 0);
        assert_eq!((piece.row, piece.col), (SPAWN_ROW, SPAWN_COL));
    }

    #[test]
    fn test_try_move_commits_or_leaves_state() {
        let mut board = board_with(BrickKind::O);
        assert!(board.try_move(0, 1));
        assert_eq!(board.active().unwrap().col, SPAWN_COL + 1);

        // O occupies shape cols 1..=2, so col 7 puts it against the right wall.
        while board.try_move(0, 1) {}
        let before = *board.active().unwrap();
        assert_eq!(before.col, 7);
        assert!(!board.try_move(0, 1));
        assert_eq!(*board.active().unwrap(), before);
    }

    #[test]
    fn test_try_move_without_active_piece() {
        let mut board = Board::new();
        assert!(!board.try_move(1, 0));
        assert!(!board.try_rotate());
        assert_eq!(board.ghost_row(), None);
    }

    #[test]
    fn test_rotation_kicks_off_the_right_wall() {
        let mut board = board_with(BrickKind::I);
        // Vertical I (rotation 3) sits in shape col 1.
        assert!(board.try_rotate());
        assert!(board.try_rotate());
        assert!(board.try_rotate());
        assert_eq!(board.active().unwrap().rotation, 3);
        while board.try_move(0, 1) {}
        let piece = *board.active().unwrap();
        assert_eq!(piece.col, 8);

        // Horizontal I needs four columns starting at col; no kick reaches col 6.
        assert!(!board.try_rotate());
        assert_eq!(*board.active().unwrap(), piece);
    }

    #[test]
    fn test_rotation_uses_first_free_kick_in_order() {
        let mut board = board_with(BrickKind::T);
        // T rotation 1 is a vertical bar in shape col 1 with a nub in col 2.
        assert!(board.try_rotate());
        while board.try_move(0, -1) {}
        let piece = *board.active().unwrap();
        assert_eq!(piece.col, -1);

        // Rotation 2 needs shape col 0 on the grid: in place collides, one right fits.
        assert!(board.try_rotate());
        let rotated = *board.active().unwrap();
        assert_eq!(rotated.rotation, 2);
        assert_eq!(rotated.col, 0);
        assert_eq!(rotated.row, piece.row);
    }

    #[test]
    fn test_lock_piece_merges_and_discards() {
        let mut board = board_with(BrickKind::O);
        board.drop_to_floor();
        board.lock_piece();
        assert!(board.active().is_none());
        assert_eq!(board.cell(23, 5), Some(4));
        assert_eq!(board.cell(24, 6), Some(4));
        assert_eq!(board.cell(24, 4), Some(0));
    }

    #[test]
    fn test_clear_lines_result() {
        let mut board = Board::new();
        for col in 0..BOARD_COLS as i8 {
            board.set_cell(24, col, 1);
            board.set_cell(23, col, 2);
        }
        board.set_cell(22, 0, 5);

        let result = board.clear_lines();
        assert_eq!(result.lines_removed, 2);
        assert_eq!(result.score_bonus, 200);
        assert_eq!(result.cleared_rows.as_slice(), &[23, 24]);
        assert_eq!(result.grid[24][0], 5);
        assert_eq!(&result.grid, board.grid());
    }

    #[test]
    fn test_ghost_row_on_empty_board() {
        let board = board_with(BrickKind::O);
        // O's lowest cells are shape row 2: landing origin row is 24 - 2.
        assert_eq!(board.ghost_row(), Some(22));
    }

    #[test]
    fn test_spawn_blocked_by_buffer_rows() {
        let mut board = Board::new();
        board.set_cell(1, 5, 3);
        assert!(board.spawn(BrickKind::O));
        assert!(board.active().is_some());
    }
}
