use twenty48::core::{Board, GameSession, GameSnapshot};
use twenty48::term::{AnchorY, GameView, MenuView, Palette, Viewport};
use twenty48::types::{Direction, MenuItem, MenuState, Theme};

fn snapshot(rows: [[u32; 4]; 4], best: u32) -> GameSnapshot {
    GameSession::from_board(Board::from_rows(&rows).unwrap(), 1, best).snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = snapshot([[0; 4]; 4], 0);
    let view = GameView::default();

    // 4 tiles of 7x3 with 1-cell gaps plus border => 35x19,
    // with a 3-row header above and 2 rows of hints below.
    let fb = view.render(&snap, Theme::Light, Viewport::new(35, 24));

    assert_eq!(fb.get(0, 3).unwrap().ch, '┌');
    assert_eq!(fb.get(34, 3).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(34, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_centers_tile_numbers() {
    let mut rows = [[0; 4]; 4];
    rows[0][0] = 2;
    rows[1][2] = 128;
    let snap = snapshot(rows, 0);
    let fb = GameView::default().render(&snap, Theme::Light, Viewport::new(35, 24));

    assert_eq!(fb.get(5, 6).unwrap().ch, '2');
    let digits: String = (20..23).map(|x| fb.get(x, 10).unwrap().ch).collect();
    assert_eq!(digits, "128");

    // Tile background follows the palette.
    let palette = Palette::for_theme(Theme::Light);
    assert_eq!(fb.get(5, 6).unwrap().style, palette.tile_style(2));
    assert_eq!(fb.get(2, 5).unwrap().style.bg, palette.tile_bg(2));
}

#[test]
fn term_view_draws_header_and_hints() {
    let mut gs = GameSession::new(4, 3, 4096);
    let _ = gs.apply_move(Direction::Left);
    let snap = gs.snapshot();

    let fb = GameView::default().render(&snap, Theme::Dark, Viewport::new(80, 30));
    let all = fb.to_text();
    assert!(all.contains("2048"));
    assert!(all.contains("4x4"));
    assert!(all.contains("SCORE"));
    assert!(all.contains("BEST 4096"));
    assert!(all.contains("restart"));
    assert!(!all.contains("GAME OVER"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let snap = snapshot([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]], 0);
    assert!(snap.game_over());

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Theme::Light, Viewport::new(35, 30));
    // Frame spans rows 3..22; the overlay title sits just above the middle row.
    assert!(fb.row_text(11).contains("GAME OVER"));
    assert!(fb.row_text(13).contains("r restart"));
}

#[test]
fn term_view_fits_large_boards_in_small_terminals() {
    let session = GameSession::new(8, 5, 0);
    let fb = GameView::default().render(&session.snapshot(), Theme::Light, Viewport::new(80, 24));
    let text = fb.to_text();
    assert!(text.contains('┌'));
    assert!(text.contains('┘'));
    assert!(text.contains("8x8"));
}

#[test]
fn term_view_survives_tiny_viewport() {
    let session = GameSession::new(8, 5, 0);
    let fb = GameView::default().render(&session.snapshot(), Theme::Dark, Viewport::new(10, 4));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 4);
}

#[test]
fn menu_view_shows_selection_values() {
    let mut state = MenuState::new(5, Theme::Dark);
    state.selected = MenuItem::Theme;

    let fb = MenuView::new().render(&state, Viewport::new(60, 20));
    let text = fb.to_text();
    assert!(text.contains("2 0 4 8"));
    assert!(text.contains("< 5x5 >"));
    assert!(text.contains("< Dark >"));
    assert!(text.contains("START GAME"));
    assert!(text.contains("Quit"));

    let palette = Palette::for_theme(Theme::Dark);
    let y = (0..fb.height())
        .find(|&y| fb.row_text(y).contains("< Dark >"))
        .unwrap();
    let x = fb.row_text(y).chars().position(|c| c == '<').unwrap() as u16;
    assert_eq!(fb.get(x, y).unwrap().style.bg, palette.selected);
}
