use crate::app::App;
use crate::app::catalog::Genre;
use crate::app::genre_style::{FALLBACK_STYLE, GenreStyle, style_for_id, style_for_name};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::loading::render_loading;

/// Names from the API win; the id is only used when the name is unknown.
fn style_for(genre: &Genre) -> GenreStyle {
    match style_for_name(&genre.name) {
        style if style == FALLBACK_STYLE => style_for_id(genre.id),
        style => style,
    }
}

/// Renders the genre menu fetched by the shell
pub fn render_genre_menu(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.genres.is_empty() {
        if app.loading_genres {
            render_loading(
                frame,
                &mut app.throbber_state,
                area,
                "Genres",
                "Loading genres...",
            );
        } else {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No genres available",
                    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press (r) to try again",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(Alignment::Center)
            .block(Block::default().title("Genres").borders(Borders::ALL));
            frame.render_widget(empty, area);
        }
        return;
    }

    let items: Vec<ListItem> = app
        .genres
        .iter()
        .map(|genre| {
            let style = style_for(genre);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", style.icon),
                    Style::default().fg(style.color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(genre.name.clone(), Style::default().fg(style.color)),
            ]))
        })
        .collect();

    let title = format!("Genres ({}) - pick one to browse", app.genres.len());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut app.genre_list_state);
}
