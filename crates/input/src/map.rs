//! Key mapping from terminal events to game and menu inputs.

use crate::types::{Direction, GameAction, MenuInput};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Direction::Right)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Direction::Down)
        }
        _ => None,
    }
}

/// Map keyboard input to game actions.
pub fn map_game_key(key: KeyEvent) -> Option<GameAction> {
    if let Some(dir) = key_direction(key.code) {
        return Some(GameAction::Move(dir));
    }

    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::OpenMenu),
        _ => None,
    }
}

/// Map keyboard input to menu navigation.
pub fn map_menu_key(key: KeyEvent) -> Option<MenuInput> {
    if let Some(dir) = key_direction(key.code) {
        return Some(match dir {
            Direction::Up => MenuInput::Up,
            Direction::Down => MenuInput::Down,
            Direction::Left => MenuInput::Left,
            Direction::Right => MenuInput::Right,
        });
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuInput::Confirm),
        KeyCode::Esc => Some(MenuInput::Back),
        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
