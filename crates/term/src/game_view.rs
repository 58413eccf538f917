//! GameView: maps a [`RenderSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The two spawn-buffer rows at the top of the grid are never drawn: grid row
//! `HIDDEN_ROWS` is the first row inside the frame.

use crate::core::bricks::occupied_cells;
use crate::core::RenderSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ShapeMatrix, Status, BOARD_COLS, BOARD_ROWS, HIDDEN_ROWS};

/// Rows of the grid that are drawn.
pub const VISIBLE_ROWS: usize = BOARD_ROWS - HIDDEN_ROWS;

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen placement of the board frame for one render.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares up terminal glyphs.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Brick color for a grid cell id.
pub fn color_for(id: u8) -> Rgb {
    match id {
        1 => Rgb::new(80, 220, 220),
        2 => Rgb::new(80, 120, 220),
        3 => Rgb::new(255, 165, 0),
        4 => Rgb::new(240, 220, 80),
        5 => Rgb::new(100, 220, 120),
        6 => Rgb::new(200, 120, 220),
        7 => Rgb::new(220, 80, 80),
        _ => Rgb::new(90, 90, 100),
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Frame size (including the border) in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_COLS as u16 * self.cell_w + 2,
            VISIBLE_ROWS as u16 + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `best` is the high score shown next to the running score.
    pub fn render_into(&self, snap: &RenderSnapshot, best: u32, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (w, h) = self.frame_size();
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        self.draw_border(fb, frame);

        for row in HIDDEN_ROWS..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                let id = snap.grid[row][col];
                if id == 0 {
                    let dot = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
                    self.fill_cell(fb, frame, row as i8, col as i8, '·', dot);
                } else {
                    self.draw_brick_cell(fb, frame, row as i8, col as i8, id);
                }
            }
        }

        if let Some(active) = snap.active {
            if let Some(ghost_row) = snap.ghost_row {
                let ghost = CellStyle::new(Rgb::new(140, 140, 140), PLAY_BG).dim();
                for (dr, dc, _) in occupied_cells(&active.shape) {
                    self.fill_cell(fb, frame, ghost_row + dr, active.col + dc, '░', ghost);
                }
            }
            for (dr, dc, id) in occupied_cells(&active.shape) {
                self.draw_brick_cell(fb, frame, active.row + dr, active.col + dc, id);
            }
        }

        self.draw_side_panel(fb, snap, best, viewport, frame);

        match snap.status {
            Status::Playing => {}
            Status::Paused => self.draw_overlay(fb, frame, "PAUSED", "P: resume"),
            Status::GameOver => self.draw_overlay(fb, frame, "GAME OVER", "N: new game"),
            Status::Won => self.draw_overlay(fb, frame, "YOU WIN", "N: new game"),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &RenderSnapshot, best: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, best, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        let style = CellStyle::default();

        fb.fill_rect(x + 1, y + 1, w - 2, h - 2, ' ', CellStyle::new(PLAY_BG, PLAY_BG));

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_brick_cell(&self, fb: &mut FrameBuffer, frame: Frame, row: i8, col: i8, id: u8) {
        let style = CellStyle::new(color_for(id), PLAY_BG).bold();
        self.fill_cell(fb, frame, row, col, '█', style);
    }

    /// Fill the screen cells for grid cell `(row, col)`; hidden or off-grid
    /// cells are skipped.
    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, row: i8, col: i8, ch: char, style: CellStyle) {
        if row < HIDDEN_ROWS as i8 || row >= BOARD_ROWS as i8 || col < 0 || col >= BOARD_COLS as i8 {
            return;
        }
        let px = frame.x + 1 + col as u16 * self.cell_w;
        let py = frame.y + 1 + (row as u16 - HIDDEN_ROWS as u16);
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &RenderSnapshot, best: u32, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        for (name, number) in [("SCORE", snap.score), ("BEST", best.max(snap.score)), ("LEVEL", snap.level)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, number, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "LINES", label);
        let end = fb.put_u32(panel_x, y + 1, snap.lines, value);
        if let Some(target) = snap.mode.sprint_target() {
            let end = fb.put_str(end, y + 1, "/", value);
            fb.put_u32(end, y + 1, target, value);
        }
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        y = self.draw_preview(fb, panel_x, y, &snap.next_preview);
        y += 1;
        y = self.draw_preview(fb, panel_x, y, &snap.second_preview);
        y += 1;

        fb.put_str(panel_x, y, "MODE", label);
        fb.put_str(panel_x, y + 1, snap.mode.as_str(), value);
    }

    /// Draw the occupied rows of a preview shape. Returns the next free row.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: &ShapeMatrix) -> u16 {
        let mut out_y = y;
        for row in shape.iter().filter(|row| row.iter().any(|&id| id != 0)) {
            for (c, &id) in row.iter().enumerate() {
                if id != 0 {
                    let style = CellStyle::new(color_for(id), PANEL_BG).bold();
                    fb.fill_rect(x + c as u16 * self.cell_w, out_y, self.cell_w, 1, '█', style);
                }
            }
            out_y += 1;
        }
        out_y
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: Frame, title: &str, hint: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        for (dy, text) in [(0, title), (1, hint)] {
            let text_w = text.chars().count() as u16;
            let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
            fb.put_str(x, mid_y + dy, text, if dy == 0 { style } else { style.dim() });
        }
    }
}
