//! Application screens and the transitions between them.
//!
//! `App` owns the current screen (menu or game), the high-score store and the
//! seed source for new sessions. The main loop feeds it one key press at a
//! time and draws whatever screen it is on.
//!
//! The best score is loaded when a game starts and saved when the session
//! ends: on game over, on return to the menu and on quit.

use crossterm::event::KeyEvent;
use log::{info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::Config;
use crate::core::{GameSession, GameSnapshot};
use crate::highscore::HighScoreStore;
use crate::input::{map_game_key, map_menu_key, should_quit};
use crate::menu::{handle_menu_input, MenuCommand};
use crate::term::{FrameBuffer, GameView, MenuView, Viewport};
use crate::types::{GameAction, MenuInput, MenuState, Theme};

/// Which screen is showing.
#[derive(Debug, Clone)]
pub enum Screen {
    Menu(MenuState),
    Game { session: GameSession, theme: Theme },
}

/// Whether the main loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App {
    screen: Screen,
    /// Last menu selections, restored when a game returns to the menu.
    menu: MenuState,
    store: HighScoreStore,
    seeds: StdRng,
    game_view: GameView,
    menu_view: MenuView,
    snapshot: GameSnapshot,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let seeds = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let menu = MenuState::new(config.size, config.theme);
        Self {
            screen: Screen::Menu(menu),
            menu,
            store: HighScoreStore::new(config.highscore_path.clone()),
            seeds,
            game_view: GameView::default(),
            menu_view: MenuView::new(),
            snapshot: GameSnapshot::default(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The running session, if a game is showing.
    pub fn session(&self) -> Option<&GameSession> {
        match &self.screen {
            Screen::Game { session, .. } => Some(session),
            Screen::Menu(_) => None,
        }
    }

    pub fn store(&self) -> &HighScoreStore {
        &self.store
    }

    /// Route one key press to the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if should_quit(key) {
            self.shutdown();
            return Control::Quit;
        }

        if matches!(self.screen, Screen::Game { .. }) {
            match map_game_key(key) {
                Some(action) => self.handle_game(action),
                None => Control::Continue,
            }
        } else {
            match map_menu_key(key) {
                Some(input) => self.handle_menu(input),
                None => Control::Continue,
            }
        }
    }

    pub fn handle_menu(&mut self, input: MenuInput) -> Control {
        let Screen::Menu(state) = &mut self.screen else {
            return Control::Continue;
        };

        match handle_menu_input(state, input) {
            MenuCommand::None => {
                self.menu = *state;
                Control::Continue
            }
            MenuCommand::Start { size, theme } => {
                self.menu = *state;
                self.start_game(size, theme);
                Control::Continue
            }
            MenuCommand::Quit => {
                info!("quit from menu");
                Control::Quit
            }
        }
    }

    pub fn handle_game(&mut self, action: GameAction) -> Control {
        let Screen::Game { session, .. } = &mut self.screen else {
            return Control::Continue;
        };

        if action == GameAction::OpenMenu {
            let best = session.best_score();
            info!("back to menu with score {}", session.score());
            self.save_high_score(best);
            self.screen = Screen::Menu(self.menu);
            return Control::Continue;
        }

        let outcome = session.apply_action(action);
        if outcome.changed && outcome.game_over {
            let best = session.best_score();
            self.save_high_score(best);
        }
        Control::Continue
    }

    /// Persist the best score if a game is running. Call before exiting.
    pub fn shutdown(&mut self) {
        if let Screen::Game { session, .. } = &self.screen {
            let best = session.best_score();
            info!("quit with score {}", session.score());
            self.save_high_score(best);
        }
    }

    pub fn render_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer) {
        match &self.screen {
            Screen::Menu(state) => self.menu_view.render_into(state, viewport, fb),
            Screen::Game { session, theme } => {
                session.snapshot_into(&mut self.snapshot);
                self.game_view.render_into(&self.snapshot, *theme, viewport, fb);
            }
        }
    }

    fn start_game(&mut self, size: usize, theme: Theme) {
        let best = self.store.load();
        let seed: u64 = self.seeds.gen();
        info!(
            "starting {}x{} game, theme {}, best {}, seed {}",
            size,
            size,
            theme.as_str(),
            best,
            seed
        );
        self.screen = Screen::Game {
            session: GameSession::new(size, seed, best),
            theme,
        };
    }

    fn save_high_score(&self, best: u32) {
        if let Err(e) = self.store.save(best) {
            warn!("high score not saved: {:#}", e);
        }
    }
}
