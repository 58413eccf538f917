//! Board tests - collision, movement, kicks, locking and line clears

use brickfall::core::board::ROTATION_KICKS;
use brickfall::core::matrix::{clear_full_rows, intersects, is_row_full};
use brickfall::core::{bricks, Board};
use brickfall::types::{BrickKind, Grid, BOARD_COLS, BOARD_ROWS, SPAWN_COL, SPAWN_ROW};

fn empty_grid() -> Grid {
    [[0; BOARD_COLS]; BOARD_ROWS]
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert!(board.active().is_none());
    for row in 0..BOARD_ROWS as i8 {
        for col in 0..BOARD_COLS as i8 {
            assert_eq!(board.cell(row, col), Some(0));
        }
    }
}

#[test]
fn test_board_cell_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(board.cell(-1, 0), None);
    assert_eq!(board.cell(0, -1), None);
    assert_eq!(board.cell(BOARD_ROWS as i8, 0), None);
    assert_eq!(board.cell(0, BOARD_COLS as i8), None);

    assert!(!board.set_cell(-1, 0, 1));
    assert!(!board.set_cell(0, BOARD_COLS as i8, 1));
    assert!(board.set_cell(24, 9, 1));
    assert_eq!(board.cell(24, 9), Some(1));
}

#[test]
fn test_rows_above_the_grid_are_open_space() {
    let grid = empty_grid();
    let t = bricks::spawn_shape(BrickKind::T);
    assert!(!intersects(&grid, t, -2, 3));
    // Columns stay bounded even above the grid.
    assert!(intersects(&grid, t, -2, -1));
    assert!(intersects(&grid, t, -2, 8));
}

#[test]
fn test_collision_with_locked_cells() {
    let mut grid = empty_grid();
    grid[10][5] = 4;
    let o = bricks::spawn_shape(BrickKind::O);
    // O cells are shape (1..=2, 1..=2).
    assert!(intersects(&grid, o, 9, 4));
    assert!(intersects(&grid, o, 8, 3));
    assert!(!intersects(&grid, o, 10, 4));
    assert!(!intersects(&grid, o, 7, 4));
}

#[test]
fn test_spawn_uses_fixed_origin() {
    let mut board = Board::new();
    for kind in BrickKind::ALL {
        board.reset();
        assert!(!board.spawn(kind));
        let active = board.active().unwrap();
        assert_eq!((active.row, active.col, active.rotation), (SPAWN_ROW, SPAWN_COL, 0));
    }
}

#[test]
fn test_move_left_against_wall_eventually_fails() {
    for kind in BrickKind::ALL {
        let mut board = Board::new();
        board.spawn(kind);
        let mut moves = 0;
        while board.try_move(0, -1) {
            moves += 1;
            assert!(moves <= BOARD_COLS, "{:?} walked through the wall", kind);
        }
        let col = board.active().unwrap().col;
        for _ in 0..5 {
            assert!(!board.try_move(0, -1));
            assert_eq!(board.active().unwrap().col, col);
        }
    }
}

#[test]
fn test_kick_order_prefers_right_before_left() {
    assert_eq!(ROTATION_KICKS[0], (0, 0));
    assert_eq!(ROTATION_KICKS[1], (0, 1));
    assert_eq!(ROTATION_KICKS[2], (0, -1));
    assert_eq!(ROTATION_KICKS[3], (-1, 0));
    assert_eq!(ROTATION_KICKS[4], (0, 2));
}

#[test]
fn test_rotation_kicks_left_when_right_is_blocked() {
    let mut board = Board::new();
    board.spawn(BrickKind::I);
    // Rotation 1 is vertical in shape col 2; against the right wall that is col 7.
    assert!(board.try_rotate());
    while board.try_move(0, 1) {}
    assert_eq!(board.active().unwrap().col, 7);

    // Rotation 2 is four wide: in place and one right both leave the grid.
    assert!(board.try_rotate());
    let active = board.active().unwrap();
    assert_eq!(active.rotation, 2);
    assert_eq!((active.row, active.col), (0, 6));
}

#[test]
fn test_rotation_kicks_up_off_the_floor() {
    let mut board = Board::new();
    board.spawn(BrickKind::I);
    assert!(board.try_rotate());
    assert!(board.try_rotate());
    // Rotation 2 is horizontal in shape row 2.
    board.drop_to_floor();
    assert_eq!(board.active().unwrap().row, 22);

    // Rotation 3 is four tall: only the upward kick fits.
    assert!(board.try_rotate());
    let active = board.active().unwrap();
    assert_eq!(active.rotation, 3);
    assert_eq!((active.row, active.col), (21, SPAWN_COL));
}

#[test]
fn test_rotation_kicks_two_right_off_the_left_wall() {
    let mut board = Board::new();
    board.spawn(BrickKind::I);
    // Vertical I in shape col 2; against the left wall that is col -2.
    assert!(board.try_rotate());
    while board.try_move(0, -1) {}
    assert_eq!(board.active().unwrap().col, -2);

    // Horizontal I needs cols origin..origin+3: only the two-right kick fits.
    assert!(board.try_rotate());
    let active = board.active().unwrap();
    assert_eq!(active.rotation, 2);
    assert_eq!((active.row, active.col), (0, 0));
}

#[test]
fn test_failed_rotation_leaves_state_unchanged() {
    let mut board = Board::new();
    board.spawn(BrickKind::I);
    // Vertical I in shape col 2.
    assert!(board.try_rotate());
    board.drop_to_floor();
    let piece = *board.active().unwrap();

    // Wall the piece in on both sides, one cell away, so no kick can fit a
    // horizontal I.
    let col = piece.col + 2;
    for row in 15..BOARD_ROWS as i8 {
        board.set_cell(row, col - 1, 1);
        board.set_cell(row, col + 1, 1);
    }
    assert!(!board.try_rotate());
    assert_eq!(*board.active().unwrap(), piece);
}

#[test]
fn test_lock_only_writes_occupied_cells() {
    let mut board = Board::new();
    board.set_cell(23, 4, 7);
    board.spawn(BrickKind::O);
    board.drop_to_floor();
    board.lock_piece();
    assert!(board.active().is_none());
    // Empty shape cell (1, 0) lies over (23, 4).
    assert_eq!(board.cell(23, 4), Some(7));
    assert_eq!(board.cell(23, 5), Some(BrickKind::O.color_id()));
}

#[test]
fn test_full_rows_always_cleared_partial_never() {
    let mut grid = empty_grid();
    grid[24] = [1; BOARD_COLS];
    grid[23] = [2; BOARD_COLS];
    grid[23][3] = 0;
    grid[22] = [3; BOARD_COLS];
    grid[21][0] = 5;

    assert!(is_row_full(&grid, 24));
    assert!(!is_row_full(&grid, 23));

    let cleared = clear_full_rows(&mut grid);
    assert_eq!(cleared.as_slice(), &[22, 24]);

    // Survivors keep their order and sink; k top rows are empty.
    assert_eq!(grid[24][0], 2);
    assert_eq!(grid[24][3], 0);
    assert_eq!(grid[23][0], 5);
    assert!(grid[..2].iter().all(|row| row.iter().all(|&c| c == 0)));
    assert_eq!(grid.len(), BOARD_ROWS);
}

#[test]
fn test_clear_result_bonus_is_quadratic() {
    for k in 1..=4usize {
        let mut grid = empty_grid();
        for row in &mut grid[BOARD_ROWS - k..] {
            *row = [1; BOARD_COLS];
        }
        let mut board = Board::from_grid(grid);
        assert!(board.active().is_none());
        let result = board.clear_lines();
        assert_eq!(result.lines_removed, k as u32);
        assert_eq!(result.score_bonus, 50 * (k * k) as u32);
        assert!(result.grid.iter().all(|row| row.iter().all(|&c| c == 0)));
    }
}

#[test]
fn test_ghost_row_tracks_obstacles() {
    let mut board = Board::new();
    board.spawn(BrickKind::O);
    assert_eq!(board.ghost_row(), Some(22));

    board.set_cell(15, 5, 1);
    // O bottom cells are shape row 2, so it rests with origin row 12.
    assert_eq!(board.ghost_row(), Some(12));

    // Ghost is computed from the current position, not the spawn row.
    board.try_move(0, -3);
    assert_eq!(board.ghost_row(), Some(22));
}
