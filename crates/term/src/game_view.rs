//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, BOARD_SIZE};

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

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_TILE: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Background and text style for a tile value (0 = empty).
pub fn tile_style(value: u32) -> CellStyle {
    let bg = match value {
        0 => EMPTY_TILE,
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        _ => Rgb::new(237, 194, 46),
    };
    let fg = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    CellStyle::new(fg, bg).bold()
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns (including a one-column gutter).
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 8x3 fits a six-digit tile with a margin and roughly squares the tile
        // on typical terminal glyphs.
        Self {
            cell_w: 8,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_SIZE as u16 * self.cell_w + 2,
            BOARD_SIZE as u16 * self.cell_h + 2,
        )
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_notice(snap, None, viewport, fb);
    }

    /// Like [`render_into`](Self::render_into), plus a one-line notice under the board.
    pub fn render_into_with_notice(
        &self,
        snap: &GameSnapshot,
        notice: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(DARK_TEXT, BOARD_BG),
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (r, row) in snap.board.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, r as u16, c as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if let Some(text) = notice {
            let y = start_y.saturating_add(frame_h);
            let style = CellStyle::new(Rgb::new(230, 200, 120), Rgb::new(0, 0, 0));
            fb.put_str_centered(start_x, y, frame_w, text, style);
        }

        // Overlays.
        if snap.paused {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PAUSED", None);
        } else {
            match snap.status {
                GameStatus::Won => self.draw_overlay(
                    fb,
                    start_x,
                    start_y,
                    frame_w,
                    frame_h,
                    "YOU WIN!",
                    Some(snap.score),
                ),
                GameStatus::Lost => {
                    let title = if snap.remaining_ms == Some(0) {
                        "TIME UP"
                    } else {
                        "GAME OVER"
                    };
                    self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, title, Some(snap.score))
                }
                GameStatus::Playing => {}
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        self.render_with_notice(snap, None, viewport)
    }

    pub fn render_with_notice(
        &self,
        snap: &GameSnapshot,
        notice: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_notice(snap, notice, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Tile at (row, col): a filled block with the value centred on its middle row.
    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: u16, col: u16, value: u32) {
        let style = tile_style(value);
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        let tile_w = self.cell_w - 1;
        fb.fill_rect(px, py, tile_w, self.cell_h, ' ', style);

        if value != 0 {
            let mut digits = [0u8; 10];
            let text = crate::fb::format_u32(value, &mut digits);
            fb.put_str_centered(px, py + self.cell_h / 2, tile_w, text, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let dim = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.high_score, value);
        y = y.saturating_add(2);

        if let Some(secs) = snap.remaining_secs() {
            fb.put_str(panel_x, y, "TIME", label);
            y = y.saturating_add(1);
            let mut buf = [0u8; 10];
            let minutes = crate::fb::format_u32(secs / 60, &mut buf);
            let minutes_w = minutes.len() as u16;
            fb.put_str(panel_x, y, minutes, value);
            fb.put_char(panel_x + minutes_w, y, ':', value);
            let sec = secs % 60;
            fb.put_char(panel_x + minutes_w + 1, y, char::from(b'0' + (sec / 10) as u8), value);
            fb.put_char(panel_x + minutes_w + 2, y, char::from(b'0' + (sec % 10) as u8), value);
            y = y.saturating_add(2);
        }

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.move_count, value);
        if panel_w >= 16 {
            fb.put_str(panel_x + 7, y, "undo", dim);
            fb.put_u32(panel_x + 12, y, snap.undo_depth, dim);
        }
        y = y.saturating_add(2);

        if panel_w >= 16 && y.saturating_add(5) < viewport.height {
            for line in ["arrows/wasd move", "u undo  p pause", "r restart", "^S save  q quit"] {
                fb.put_str(panel_x, y, line, dim);
                y = y.saturating_add(1);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        title: &str,
        score: Option<u32>,
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let mid_y = start_y.saturating_add(frame_h / 2);
        fb.put_str_centered(start_x, mid_y.saturating_sub(1), frame_w, title, style);

        if let Some(score) = score {
            let mut buf = [0u8; 10];
            let digits = crate::fb::format_u32(score, &mut buf);
            // "Score: " + digits, centred as one run.
            let len = 7 + digits.len() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(len) / 2);
            let plain = CellStyle { bold: false, ..style };
            fb.put_str(x, mid_y, "Score: ", plain);
            fb.put_str(x + 7, mid_y, digits, plain);
            fb.put_str_centered(start_x, mid_y + 1, frame_w, "r to restart", plain.dim());
        }
    }
}
