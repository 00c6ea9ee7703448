//! Terminal 2048 runner (default binary).
//!
//! Blocks on crossterm events and redraws after each one; there is no tick.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use twenty48::app::{App, Control};
use twenty48::config::{Cli, Config};
use twenty48::logging;
use twenty48::term::{FrameBuffer, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::from_cli(Cli::parse())?;
    logging::init(config.log_file.as_deref())?;
    info!(
        "twenty48 starting: size {}, theme {}, high score file {}",
        config.size,
        config.theme.as_str(),
        config.highscore_path.display()
    );

    let mut app = App::new(&config);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut app, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    if result.is_err() {
        app.shutdown();
    }
    result
}

fn run(app: &mut App, term: &mut TerminalRenderer) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key) == Control::Quit {
                    return Ok(());
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
