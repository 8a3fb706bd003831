use crate::app::catalog::Movie;
use crate::app::genre_style::style_for_name;
use crate::app::pagination::showing_range;
use crate::app::route::Route;
use crate::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::loading::render_loading;
use super::movie_detail::get_rating_color;
use super::pagination::render_pagination;

pub const CARD_MIN_WIDTH: u16 = 30;
pub const CARD_HEIGHT: u16 = 6;
const MAX_COLUMNS: u16 = 6;

/// Number of card columns that fit in `width`.
pub fn gallery_columns(width: u16) -> usize {
    (width / CARD_MIN_WIDTH).clamp(1, MAX_COLUMNS) as usize
}

/// Renders the listing view: heading, card gallery and page strip
pub fn render_main_content(frame: &mut Frame, app: &mut App, area: Rect) {
    let show_pager = !app.listing.loading && app.listing.total_pages > 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                              // Heading / search
            Constraint::Min(CARD_HEIGHT),                       // Gallery
            Constraint::Length(if show_pager { 3 } else { 0 }), // Pagination
        ])
        .split(area);

    render_heading(frame, app, chunks[0]);

    if app.listing.loading {
        render_loading(
            frame,
            &mut app.throbber_state,
            chunks[1],
            "Movies",
            "Loading movies...",
        );
    } else if app.listing.movies.is_empty() {
        render_empty_state(frame, app, chunks[1]);
    } else {
        render_gallery(frame, app, chunks[1]);
    }

    if show_pager {
        render_pagination(
            frame,
            app.listing.page,
            app.listing.total_pages,
            listing_summary(app),
            chunks[2],
        );
    }
}

/// "11-20 of 250 movies" when the listing carried enough metadata.
fn listing_summary(app: &App) -> Option<String> {
    let listing = &app.listing;
    let (first, last) = showing_range(listing.page, listing.per_page?, listing.movies.len())?;
    let total = listing.total_count?;
    Some(format!("{first}-{last} of {total} movies"))
}

fn render_heading(frame: &mut Frame, app: &App, area: Rect) {
    let count = app.listing.movies.len();

    let (title, line, border) = match &app.route {
        Route::Genre { id, .. } => {
            let name = app.genre_name(*id);
            let style = style_for_name(&name);
            let line = Line::from(vec![
                Span::styled(
                    format!("{} {}", style.icon, name),
                    Style::default().fg(style.color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {count} movies on this page"),
                    Style::default().fg(Color::Gray),
                ),
            ]);
            ("Genre", line, Color::DarkGray)
        }
        _ if app.searching => {
            let line = Line::from(vec![
                Span::raw(app.search_input.clone()),
                Span::styled("█", Style::default().fg(Color::Yellow)),
            ]);
            ("Search", line, Color::Yellow)
        }
        _ => match app.active_query() {
            Some(query) => {
                let line = Line::from(vec![
                    Span::styled(
                        format!("Results for \"{query}\""),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  ({count} movies)"), Style::default().fg(Color::Gray)),
                ]);
                ("Search", line, Color::DarkGray)
            }
            None => (
                "Search",
                Line::from(Span::styled(
                    "Press (/) to search movies",
                    Style::default().fg(Color::DarkGray),
                )),
                Color::DarkGray,
            ),
        },
    };

    let heading = Paragraph::new(line).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(heading, area);
}

fn render_empty_state(frame: &mut Frame, app: &App, area: Rect) {
    let hint = match app.current_screen() {
        _ if app.error.is_some() => "The request failed. Press (r) to try again",
        CurrentScreen::GenreListing => "There are no movies in this genre. Press (b) to go back",
        _ if app.active_query().is_some() => "Try a different search term, or (c) to clear",
        _ => "Press (r) to try again",
    };

    let empty_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No movies found",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];

    let empty = Paragraph::new(empty_text)
        .alignment(Alignment::Center)
        .block(Block::default().title("Movies").borders(Borders::ALL));

    frame.render_widget(empty, area);
}

fn render_gallery(frame: &mut Frame, app: &mut App, area: Rect) {
    let columns = gallery_columns(area.width);
    app.listing.columns = columns;

    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = app.listing.selected / columns;
    let first_row = (selected_row + 1).saturating_sub(visible_rows);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (row_index, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (column, cell) in cells.iter().enumerate() {
            let index = (first_row + row_index) * columns + column;
            if let Some(movie) = app.listing.movies.get(index) {
                render_card(frame, movie, index == app.listing.selected, *cell);
            }
        }
    }
}

fn or_unknown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("Unknown")
}

fn render_card(frame: &mut Frame, movie: &Movie, selected: bool, area: Rect) {
    let border = if selected { Color::Yellow } else { Color::DarkGray };
    let title_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let mut rating = vec![match &movie.imdb_rating {
        Some(r) => Span::styled(
            format!("★ {r}"),
            Style::default().fg(get_rating_color(r)).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("★ N/A", Style::default().fg(Color::Gray)),
    }];
    if !movie.images.is_empty() {
        rating.push(Span::styled(
            format!("  {} stills", movie.images.len()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut genres = Vec::new();
    for name in movie.genres.iter().take(2) {
        let style = style_for_name(name);
        if !genres.is_empty() {
            genres.push(Span::raw(" "));
        }
        genres.push(Span::styled(
            format!("{} {}", style.icon, name),
            Style::default().fg(style.color),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(movie.title.clone(), title_style)),
        Line::from(rating),
        Line::from(Span::styled(
            format!("{} · {}", or_unknown(&movie.year), or_unknown(&movie.country)),
            Style::default().fg(Color::Gray),
        )),
        Line::from(genres),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );

    frame.render_widget(card, area);
}
