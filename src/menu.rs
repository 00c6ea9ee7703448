//! Menu behaviour: a dispatch table keyed by the selected row.
//!
//! Up/Down move the highlight; every other input goes to the handler of the
//! highlighted row. Handlers are plain functions over [`MenuState`].

use crate::types::{MenuInput, MenuItem, MenuState, Theme, MAX_BOARD_SIZE, MIN_MENU_SIZE};

/// What the menu asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    None,
    Start { size: usize, theme: Theme },
    Quit,
}

type MenuHandler = fn(&mut MenuState, MenuInput) -> MenuCommand;

/// One entry per row, in `MenuItem::ALL` order.
static DISPATCH: [(MenuItem, MenuHandler); 4] = [
    (MenuItem::Size, on_size),
    (MenuItem::Theme, on_theme),
    (MenuItem::Start, on_start),
    (MenuItem::Quit, on_quit),
];

pub fn handle_menu_input(state: &mut MenuState, input: MenuInput) -> MenuCommand {
    match input {
        MenuInput::Up => {
            state.selected = state.selected.prev();
            MenuCommand::None
        }
        MenuInput::Down => {
            state.selected = state.selected.next();
            MenuCommand::None
        }
        MenuInput::Back => MenuCommand::Quit,
        MenuInput::Left | MenuInput::Right | MenuInput::Confirm => {
            let (item, handler) = DISPATCH[state.selected.index()];
            debug_assert_eq!(item, state.selected);
            handler(state, input)
        }
    }
}

/// Step `size` by one within the menu range, wrapping at both ends.
fn cycle_size(size: usize, forward: bool) -> usize {
    let span = MAX_BOARD_SIZE - MIN_MENU_SIZE + 1;
    let offset = size.clamp(MIN_MENU_SIZE, MAX_BOARD_SIZE) - MIN_MENU_SIZE;
    let offset = if forward {
        (offset + 1) % span
    } else {
        (offset + span - 1) % span
    };
    MIN_MENU_SIZE + offset
}

fn on_size(state: &mut MenuState, input: MenuInput) -> MenuCommand {
    state.size = cycle_size(state.size, input != MenuInput::Left);
    MenuCommand::None
}

fn on_theme(state: &mut MenuState, _input: MenuInput) -> MenuCommand {
    state.theme = state.theme.toggle();
    MenuCommand::None
}

fn on_start(state: &mut MenuState, input: MenuInput) -> MenuCommand {
    if input == MenuInput::Confirm {
        MenuCommand::Start {
            size: state.size,
            theme: state.theme,
        }
    } else {
        MenuCommand::None
    }
}

fn on_quit(_state: &mut MenuState, input: MenuInput) -> MenuCommand {
    if input == MenuInput::Confirm {
        MenuCommand::Quit
    } else {
        MenuCommand::None
    }
}
