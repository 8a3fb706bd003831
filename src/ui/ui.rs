use crate::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::footer::render_footer;
use super::genre_menu::render_genre_menu;
use super::header::render_header;
use super::main_content::render_main_content;
use super::movie_detail::render_movie_detail;

/// Main UI rendering function that orchestrates all UI components
pub fn ui(frame: &mut Frame, app: &mut App) {
    // Create the main layout: header, content area, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    match app.current_screen() {
        CurrentScreen::Listing | CurrentScreen::GenreListing => {
            render_main_content(frame, app, chunks[1]);
        }
        CurrentScreen::Genres => {
            render_genre_menu(frame, app, chunks[1]);
        }
        CurrentScreen::MovieDetail => {
            render_movie_detail(frame, app, chunks[1]);
        }
    }

    render_footer(frame, app, chunks[2]);
}
