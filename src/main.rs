mod app;
mod config;
mod logging;
mod ui;

use std::error::Error;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::prelude::CrosstermBackend;
use ratatui_image::picker::Picker;

use crate::app::catalog::HttpCatalog;
use crate::app::route::Route;
use crate::app::{App, CurrentScreen};
use crate::config::Config;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();

    let _log_guard = match logging::init_logging(&config.log_dir()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: failed to initialize logging: {e}");
            None
        }
    };
    tracing::info!(api = %config.api_url, route = %config.route, "starting moviedb-tui");

    let catalog = HttpCatalog::new(&config.api_url, config.timeout())?;

    // setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr(); // This is a special case. Normally using stdout is fine
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;

    let picker = if config.no_posters {
        None
    } else {
        match Picker::from_query_stdio() {
            Ok(picker) => Some(picker),
            Err(e) => {
                tracing::warn!(error = %e, "terminal image support unavailable, posters disabled");
                None
            }
        }
    };

    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // create app and run it
    let mut app = App::new(Arc::new(catalog), picker, config.route.clone());
    app.start();
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal loop failed");
    }
    tracing::info!(route = %app.route, "exiting");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        // Pick up whatever the fetch threads have finished
        app.drain_messages();
        app.tick();

        // Poll for events with a timeout to allow UI updates
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    // Skip events that are not KeyEventKind::Press
                    continue;
                }
                if handle_key(app, key) {
                    return Ok(());
                }
            }
        }
    }
}

/// Applies one key press. Returns true when the user asked to quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    // Handle search input when searching is active
    if app.searching {
        match key.code {
            KeyCode::Char(c) => app.search_input.push(c),
            KeyCode::Backspace => {
                app.search_input.pop();
            }
            KeyCode::Enter => app.submit_search(),
            KeyCode::Esc => app.cancel_search(),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('H') => app.navigate(Route::home()),
        KeyCode::Char('g') => app.navigate(Route::Genres),
        KeyCode::Esc | KeyCode::Char('b') => app.back(),
        KeyCode::Char('r') => app.reload(),
        _ => match app.current_screen() {
            CurrentScreen::Listing | CurrentScreen::GenreListing => match key.code {
                KeyCode::Left | KeyCode::Char('h') => app.select_previous(),
                KeyCode::Right | KeyCode::Char('l') => app.select_next(),
                KeyCode::Up | KeyCode::Char('k') => app.select_up(),
                KeyCode::Down | KeyCode::Char('j') => app.select_down(),
                KeyCode::Enter => app.open_selected(),
                KeyCode::Char('n') | KeyCode::Char(']') | KeyCode::PageDown => app.next_page(),
                KeyCode::Char('p') | KeyCode::Char('[') | KeyCode::PageUp => app.previous_page(),
                KeyCode::Char('/') if app.current_screen() == CurrentScreen::Listing => {
                    app.start_search()
                }
                KeyCode::Char('c') => app.clear_search(),
                _ => {}
            },
            CurrentScreen::Genres => match key.code {
                KeyCode::Down | KeyCode::Char('j') => app.next_genre(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_genre(),
                KeyCode::Enter => app.open_selected(),
                _ => {}
            },
            CurrentScreen::MovieDetail => {}
        },
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{FakeCatalog, settle};

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn started(route: Route) -> App {
        let mut app = App::new(Arc::new(FakeCatalog::default()), None, route);
        app.start();
        settle(&mut app);
        app
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let mut app = started(Route::home());
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn typing_a_search_does_not_trigger_shortcuts() {
        let mut app = started(Route::home());
        press(&mut app, KeyCode::Char('/'));
        assert!(app.searching);

        type_text(&mut app, "qgb7");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.search_input, "qgb7");

        assert!(!press(&mut app, KeyCode::Enter));
        assert_eq!(app.route, Route::search("qgb7"));
    }

    #[test]
    fn escape_cancels_search_input() {
        let mut app = started(Route::home());
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "heat");
        press(&mut app, KeyCode::Esc);
        assert!(!app.searching);
        assert!(app.search_input.is_empty());
        assert_eq!(app.route, Route::home());
    }

    #[test]
    fn genre_flow_by_keyboard() {
        let mut app = started(Route::home());
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.current_screen(), CurrentScreen::Genres);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        settle(&mut app);
        assert_eq!(app.route, Route::Genre { id: 2, page: 1 });

        press(&mut app, KeyCode::Char(']'));
        settle(&mut app);
        assert_eq!(app.route, Route::Genre { id: 2, page: 2 });

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.route, Route::Genres);
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.route, Route::home());
    }

    #[test]
    fn slash_is_ignored_on_genre_listings() {
        let mut app = started(Route::Genre { id: 2, page: 1 });
        press(&mut app, KeyCode::Char('/'));
        assert!(!app.searching);
    }

    #[test]
    fn enter_opens_the_selected_card() {
        let mut app = started(Route::home().with_page(2));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::Movie { id: 12 });

        press(&mut app, KeyCode::Char('H'));
        assert_eq!(app.route, Route::home());
    }
}
