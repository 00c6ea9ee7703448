//! MenuView: draws the board-size / theme menu.
//!
//! Pure like [`crate::GameView`]; the menu is drawn in the theme currently
//! selected so the choice previews itself.

use crate::fb::{CellStyle, FrameBuffer};
use crate::game_view::{draw_border, Viewport};
use crate::theme::Palette;
use crate::types::{MenuItem, MenuState};

const BUTTON_W: u16 = 24;
const BUTTON_GAP: u16 = 1;
const TITLE: &str = "2 0 4 8";
const HINTS: &str = "up/down select  left/right change  enter confirm";

#[derive(Debug, Default)]
pub struct MenuView;

impl MenuView {
    pub fn new() -> Self {
        Self
    }

    /// Text shown on a menu row.
    pub fn item_text(item: MenuItem, state: &MenuState) -> String {
        match item {
            MenuItem::Size => format!("{}  < {}x{} >", item.label(), state.size, state.size),
            MenuItem::Theme => format!("{}  < {} >", item.label(), state.theme.label()),
            MenuItem::Start | MenuItem::Quit => item.label().to_string(),
        }
    }

    pub fn render_into(&self, state: &MenuState, viewport: Viewport, fb: &mut FrameBuffer) {
        let palette = Palette::for_theme(state.theme);
        fb.resize(viewport.width, viewport.height);
        fb.clear(palette.text_style().cell(' '));

        let rows = MenuItem::ALL.len() as u16;
        // title, spacer, buttons, spacer, hints
        let block_h = 2 + rows * (1 + BUTTON_GAP) + 2;
        let top = viewport.height.saturating_sub(block_h) / 2;
        let x = viewport.width.saturating_sub(BUTTON_W) / 2;

        let title = palette.text_style().bold();
        fb.put_str_centered(0, top, viewport.width, TITLE, title);

        let mut y = top + 2;
        for item in MenuItem::ALL {
            let bg = if item == state.selected {
                palette.selected
            } else {
                palette.button
            };
            let style = CellStyle::new(palette.button_text, bg);
            let style = if item == MenuItem::Start { style.bold() } else { style };
            fb.fill_rect(x, y, BUTTON_W, 1, ' ', style);
            fb.put_str_centered(x, y, BUTTON_W, &Self::item_text(item, state), style);
            y += 1 + BUTTON_GAP;
        }

        // Frame around the buttons.
        let frame_style = CellStyle::new(palette.button_text, palette.background);
        draw_border(
            fb,
            x.saturating_sub(2),
            top + 1,
            BUTTON_W + 4,
            rows * (1 + BUTTON_GAP) + 1,
            frame_style,
        );

        fb.put_str_centered(0, y + 1, viewport.width, HINTS, palette.text_style().dim());
    }

    pub fn render(&self, state: &MenuState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Theme;

    #[test]
    fn item_text_shows_current_values() {
        let state = MenuState::new(5, Theme::Dark);
        assert_eq!(MenuView::item_text(MenuItem::Size, &state), "Board  < 5x5 >");
        assert_eq!(MenuView::item_text(MenuItem::Theme, &state), "Theme  < Dark >");
        assert_eq!(MenuView::item_text(MenuItem::Start, &state), "START GAME");
    }
}
