//! authflow
//!
//! Dual-mode login/signup TUI: field validation, shared state store, and
//! positioned modal overlays. The credential check itself is supplied by
//! the caller; this binary wires in a demo handler.

mod app;
mod input;
mod store;
mod ui;

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::{App, AppConfig};
use store::{Action, Store};

/// Credentials accepted by the demo handler.
const DEMO_EMAIL: &str = "johndoe@gmail.com";
const DEMO_PASSWORD: &str = "qwerty";

fn main() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let config = AppConfig::default();
    let tick_rate = config.tick_rate;
    let mut app = App::new(config, Box::new(check_credentials));

    while !app.should_quit {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key_event(key);
            }
        }
    }

    Ok(())
}

/// Stand-in for the host application's credential check. Flags the store on
/// failure, navigates to the home page on success.
fn check_credentials(email: &str, password: &str, store: &mut Store) {
    let ok = email == DEMO_EMAIL && password == DEMO_PASSWORD;
    store.dispatch(Action::SetAuthError(!ok));
    if ok {
        store.is_user_authorised = true;
        store.is_home_page = true;
        store.is_authorisation_page = false;
    }
}
