//! Color palettes for the light and dark themes.

use crate::fb::{CellStyle, Rgb};
use crate::types::{Theme, Tile};

/// Colors used by the game and menu views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub text: Rgb,
    pub board: Rgb,
    pub empty: Rgb,
    /// Backgrounds for 2, 4, 8, ... 2048.
    pub tiles: [Rgb; 11],
    /// Background for tiles above 2048.
    pub default_tile: Rgb,
    /// Text on low tiles (2 and 4).
    pub tile_text_low: Rgb,
    /// Text on everything from 8 up.
    pub tile_text_high: Rgb,
    pub button: Rgb,
    pub button_text: Rgb,
    pub selected: Rgb,
    pub accent: Rgb,
}

const LIGHT: Palette = Palette {
    background: Rgb::new(250, 248, 239),
    text: Rgb::new(119, 110, 101),
    board: Rgb::new(187, 173, 160),
    empty: Rgb::new(205, 193, 180),
    tiles: [
        Rgb::new(238, 228, 218),
        Rgb::new(237, 224, 200),
        Rgb::new(242, 177, 121),
        Rgb::new(245, 149, 99),
        Rgb::new(246, 124, 95),
        Rgb::new(246, 94, 59),
        Rgb::new(237, 207, 114),
        Rgb::new(237, 204, 97),
        Rgb::new(237, 200, 80),
        Rgb::new(237, 197, 63),
        Rgb::new(237, 194, 46),
    ],
    default_tile: Rgb::new(60, 58, 50),
    tile_text_low: Rgb::new(119, 110, 101),
    tile_text_high: Rgb::new(249, 246, 242),
    button: Rgb::new(187, 173, 160),
    button_text: Rgb::new(60, 58, 50),
    selected: Rgb::new(100, 200, 100),
    accent: Rgb::new(246, 94, 59),
};

const DARK: Palette = Palette {
    background: Rgb::new(30, 30, 36),
    text: Rgb::new(220, 220, 220),
    board: Rgb::new(60, 60, 70),
    empty: Rgb::new(80, 80, 92),
    tiles: [
        Rgb::new(170, 200, 230),
        Rgb::new(150, 185, 225),
        Rgb::new(120, 200, 170),
        Rgb::new(100, 190, 140),
        Rgb::new(200, 190, 110),
        Rgb::new(220, 170, 90),
        Rgb::new(230, 140, 90),
        Rgb::new(230, 110, 90),
        Rgb::new(220, 90, 120),
        Rgb::new(200, 90, 170),
        Rgb::new(170, 100, 220),
    ],
    default_tile: Rgb::new(240, 240, 240),
    tile_text_low: Rgb::new(0, 0, 0),
    tile_text_high: Rgb::new(0, 0, 0),
    button: Rgb::new(70, 70, 84),
    button_text: Rgb::new(230, 230, 230),
    selected: Rgb::new(100, 200, 100),
    accent: Rgb::new(255, 50, 50),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    /// Background color for a tile (0 is the empty cell).
    pub fn tile_bg(&self, tile: Tile) -> Rgb {
        if tile == 0 {
            return self.empty;
        }
        // 2 -> 0, 4 -> 1, ..., 2048 -> 10
        let rank = tile.trailing_zeros() as usize;
        match rank.checked_sub(1) {
            Some(i) if i < self.tiles.len() => self.tiles[i],
            _ => self.default_tile,
        }
    }

    pub fn tile_fg(&self, tile: Tile) -> Rgb {
        if tile <= 4 {
            self.tile_text_low
        } else {
            self.tile_text_high
        }
    }

    pub fn tile_style(&self, tile: Tile) -> CellStyle {
        CellStyle::new(self.tile_fg(tile), self.tile_bg(tile)).bold()
    }

    /// Plain text on the screen background.
    pub fn text_style(&self) -> CellStyle {
        CellStyle::new(self.text, self.background)
    }
}
