//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout, top to bottom: title row, score row, a blank row, the
//! bordered board, a blank row, the key hint row.

use crate::core::GameSnapshot;
use crate::fb::{digit_count, CellStyle, FrameBuffer};
use crate::theme::Palette;
use crate::types::{Theme, Tile};

/// Rows above the board frame (title, score, spacer).
const HEADER_ROWS: u16 = 3;
/// Rows below the board frame (spacer, hints).
const FOOTER_ROWS: u16 = 2;

const HINTS: &str = "arrows move  r restart  esc menu  q quit";

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

/// Tile geometry in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGeometry {
    pub tile_w: u16,
    pub tile_h: u16,
    pub gap_x: u16,
    pub gap_y: u16,
}

impl TileGeometry {
    pub const fn new(tile_w: u16, tile_h: u16, gap_x: u16, gap_y: u16) -> Self {
        Self {
            tile_w,
            tile_h,
            gap_x,
            gap_y,
        }
    }

    /// Board frame size (border included) for an `n` × `n` board.
    pub fn frame_size(&self, n: u16) -> (u16, u16) {
        let w = n * self.tile_w + (n + 1) * self.gap_x + 2;
        let h = n * self.tile_h + (n + 1) * self.gap_y + 2;
        (w, h)
    }
}

/// Fallbacks tried in order when the preferred geometry does not fit.
const COMPACT: [TileGeometry; 2] = [TileGeometry::new(6, 1, 1, 1), TileGeometry::new(5, 1, 1, 0)];

/// Resolved positions for one frame.
#[derive(Debug, Clone, Copy)]
struct Layout {
    geo: TileGeometry,
    frame_x: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
    header_y: u16,
}

/// A terminal renderer for the 2048 board.
pub struct GameView {
    geometry: TileGeometry,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 tiles look roughly square in common terminal fonts.
        Self {
            geometry: TileGeometry::new(7, 3, 1, 1),
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(geometry: TileGeometry) -> Self {
        Self {
            geometry,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Pick the largest geometry that fits, falling back to the most compact one.
    fn layout(&self, n: u16, viewport: Viewport) -> Layout {
        let candidates = std::iter::once(self.geometry).chain(COMPACT);
        let mut chosen = COMPACT[COMPACT.len() - 1];
        for geo in candidates {
            let (w, h) = geo.frame_size(n);
            if w <= viewport.width && h + HEADER_ROWS + FOOTER_ROWS <= viewport.height {
                chosen = geo;
                break;
            }
        }

        let (frame_w, frame_h) = chosen.frame_size(n);
        let block_h = frame_h + HEADER_ROWS + FOOTER_ROWS;
        let header_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(block_h) / 2,
            AnchorY::Top => 0,
        };

        Layout {
            geo: chosen,
            frame_x: viewport.width.saturating_sub(frame_w) / 2,
            frame_y: header_y + HEADER_ROWS,
            frame_w,
            frame_h,
            header_y,
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, theme: Theme, viewport: Viewport, fb: &mut FrameBuffer) {
        let palette = Palette::for_theme(theme);
        fb.resize(viewport.width, viewport.height);
        fb.clear(palette.text_style().cell(' '));

        let n = snap.size as u16;
        let layout = self.layout(n, viewport);

        self.draw_header(fb, snap, palette, &layout);

        let frame_style = CellStyle::new(palette.board, palette.background);
        let inner_style = CellStyle::new(palette.text, palette.board);
        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            inner_style,
        );
        draw_border(fb, layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h, frame_style);

        for (r, row) in snap.rows().enumerate() {
            for (c, &tile) in row.iter().enumerate() {
                self.draw_tile(fb, palette, &layout, r as u16, c as u16, tile);
            }
        }

        let hint_y = layout.frame_y + layout.frame_h + 1;
        fb.put_str_centered(
            layout.frame_x,
            hint_y,
            layout.frame_w,
            HINTS,
            palette.text_style().dim(),
        );

        if snap.game_over() {
            self.draw_game_over(fb, palette, &layout);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, theme: Theme, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, theme, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, palette: &Palette, layout: &Layout) {
        let x = layout.frame_x;
        let right = layout.frame_x + layout.frame_w;
        let label = palette.text_style().bold();
        let value = palette.text_style();

        let y = layout.header_y;
        fb.put_str(x, y, "2048", label);
        // "NxN" right-aligned over the frame.
        let size_w = 2 * digit_count(snap.size as u32) + 1;
        let sx = right.saturating_sub(size_w);
        let used = fb.put_u32(sx, y, snap.size as u32, value);
        fb.put_char(sx + used, y, 'x', value);
        fb.put_u32(sx + used + 1, y, snap.size as u32, value);

        let y = y + 1;
        fb.put_str(x, y, "SCORE ", label);
        fb.put_u32(x + 6, y, snap.score, value);

        let best_style = if snap.score > 0 && snap.score >= snap.best {
            CellStyle::new(palette.accent, palette.background).bold()
        } else {
            value
        };
        let bx = right.saturating_sub(5 + digit_count(snap.best));
        fb.put_str(bx, y, "BEST ", label);
        fb.put_u32(bx + 5, y, snap.best, best_style);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, palette: &Palette, layout: &Layout, r: u16, c: u16, tile: Tile) {
        let geo = layout.geo;
        let px = layout.frame_x + 1 + geo.gap_x + c * (geo.tile_w + geo.gap_x);
        let py = layout.frame_y + 1 + geo.gap_y + r * (geo.tile_h + geo.gap_y);
        let style = palette.tile_style(tile);
        fb.fill_rect(px, py, geo.tile_w, geo.tile_h, ' ', style);

        let mid_y = py + geo.tile_h / 2;
        if tile == 0 {
            let dot = CellStyle::new(palette.board, palette.empty).dim();
            fb.put_char(px + geo.tile_w / 2, mid_y, '·', dot);
            return;
        }

        let (value, suffix) = tile_label(tile, geo.tile_w);
        let width = digit_count(value) + u16::from(suffix.is_some());
        let x = px + geo.tile_w.saturating_sub(width) / 2;
        let used = fb.put_u32(x, mid_y, value, style);
        if let Some(suffix) = suffix {
            fb.put_char(x + used, mid_y, suffix, style);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, palette: &Palette, layout: &Layout) {
        let mid_y = layout.frame_y + layout.frame_h / 2;
        let band = palette.text_style();
        fb.fill_rect(
            layout.frame_x + 1,
            mid_y.saturating_sub(1),
            layout.frame_w.saturating_sub(2),
            3,
            ' ',
            band,
        );
        let title = CellStyle::new(palette.accent, palette.background).bold();
        fb.put_str_centered(layout.frame_x, mid_y.saturating_sub(1), layout.frame_w, "GAME OVER", title);
        fb.put_str_centered(layout.frame_x, mid_y + 1, layout.frame_w, "r restart  esc menu", band);
    }
}

/// Shorten `tile` to at most `width` cells: 131072 in 5 cells is "131k".
fn tile_label(tile: Tile, width: u16) -> (u32, Option<char>) {
    if digit_count(tile) <= width {
        return (tile, None);
    }
    let mut value = tile;
    for suffix in ['k', 'M', 'G'] {
        value /= 1000;
        if digit_count(value) < width {
            return (value, Some(suffix));
        }
    }
    (value, Some('G'))
}

pub(crate) fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_counts_gaps_and_border() {
        let geo = TileGeometry::new(7, 3, 1, 1);
        assert_eq!(geo.frame_size(4), (35, 19));
        assert_eq!(TileGeometry::new(5, 1, 1, 0).frame_size(8), (51, 10));
    }

    #[test]
    fn layout_falls_back_to_compact_tiles() {
        let view = GameView::default();
        let full = view.layout(4, Viewport::new(80, 24));
        assert_eq!(full.geo, TileGeometry::new(7, 3, 1, 1));

        let compact = view.layout(5, Viewport::new(80, 24));
        assert_eq!(compact.geo, COMPACT[0]);

        let tight = view.layout(8, Viewport::new(80, 20));
        assert_eq!(tight.geo, COMPACT[1]);
    }

    #[test]
    fn wide_tiles_get_a_suffix() {
        assert_eq!(tile_label(2048, 5), (2048, None));
        assert_eq!(tile_label(65536, 5), (65536, None));
        assert_eq!(tile_label(131072, 5), (131, Some('k')));
        assert_eq!(tile_label(1 << 30, 5), (1073, Some('M')));
        assert_eq!(tile_label(u32::MAX, 5), (4294, Some('M')));
        assert_eq!(tile_label(1 << 31, 7), (2147, Some('M')));
    }

    #[test]
    fn six_digit_tile_stays_inside_compact_tile() {
        let mut snap = GameSnapshot::default();
        snap.size = 8;
        snap.board[0][0] = 131072;
        snap.board[0][1] = 2;

        // 8x8 in 80x20 uses the 5-wide tiles: frame at (14, 5), first tile
        // spans x 16..21, the gap is x 21 and the next tile starts at x 22.
        let fb = GameView::default().render(&snap, Theme::Light, Viewport::new(80, 20));
        let label: String = (16..21).map(|x| fb.get(x, 6).unwrap().ch).collect();
        assert_eq!(label, "131k ");
        assert_eq!(fb.get(21, 6).unwrap().ch, ' ');
        assert_eq!(fb.get(24, 6).unwrap().ch, '2');
    }
}
