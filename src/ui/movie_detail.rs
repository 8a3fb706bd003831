use crate::app::App;
use crate::app::catalog::MovieDetail;
use crate::app::genre_style::style_for_name;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use ratatui_image::{Resize, StatefulImage, protocol::StatefulProtocol};
use throbber_widgets_tui::ThrobberState;
use tui_big_text::{BigText, PixelSize};

use super::loading::render_loading;

/// Below this width the poster column is dropped.
const POSTER_MIN_WIDTH: u16 = 80;

/// Renders the movie detail screen
pub fn render_movie_detail(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.detail.loading {
        render_loading(
            frame,
            &mut app.throbber_state,
            area,
            "Movie Details",
            "Fetching movie details...",
        );
        return;
    }

    if app.detail.movie.is_some() {
        render_movie_info(frame, area, app);
    } else {
        render_not_found(frame, area);
    }
}

/// Renders the poster section
fn render_poster_section(
    frame: &mut Frame,
    area: Rect,
    poster: Option<&mut StatefulProtocol>,
    loading: bool,
    throbber_state: &mut ThrobberState,
) {
    if loading {
        render_loading(frame, throbber_state, area, "Poster", "Downloading poster...");
    } else if let Some(protocol) = poster {
        let image = StatefulImage::<StatefulProtocol>::default().resize(Resize::Fit(None));

        let poster_block = Block::default().borders(Borders::ALL).title("Poster");

        let inner_area = poster_block.inner(area);
        frame.render_widget(poster_block, area);
        frame.render_stateful_widget(image, inner_area, protocol);
    } else {
        let placeholder_text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "No poster available",
                Style::default().fg(Color::Gray),
            )),
        ];

        let placeholder_paragraph = Paragraph::new(placeholder_text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Poster"));

        frame.render_widget(placeholder_paragraph, area);
    }
}

/// Renders the not-found state with big text
fn render_not_found(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Big text
            Constraint::Min(5),    // Instructions
        ])
        .split(area);

    let big_text = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .lines(vec!["MOVIE".into(), "NOT FOUND".into()])
        .alignment(Alignment::Center)
        .build();

    frame.render_widget(big_text, chunks[0]);

    let instructions = vec![
        Line::from(""),
        Line::from(Span::styled(
            "The catalog has no record for this movie, or it could not be reached",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press (r) to retry, (Esc) or (b) to go back",
            Style::default().fg(Color::Gray),
        )),
    ];

    let instructions_paragraph = Paragraph::new(instructions)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(instructions_paragraph, chunks[1]);
}

/// Renders movie information
fn render_movie_info(frame: &mut Frame, area: Rect, app: &mut App) {
    let App {
        detail,
        throbber_state,
        ..
    } = app;
    let Some(movie) = detail.movie.as_ref() else {
        return;
    };

    let outer_block = Block::default()
        .title(format!("Movie Details - {}", movie.title))
        .borders(Borders::ALL)
        .style(Style::default());

    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    let info_area = if inner_area.width >= POSTER_MIN_WIDTH {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(inner_area);

        render_poster_section(
            frame,
            columns[0],
            detail.poster.as_mut(),
            detail.loading_poster,
            throbber_state,
        );
        columns[1]
    } else {
        inner_area
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title info
            Constraint::Min(5),    // Content
        ])
        .split(info_area);

    render_title_section(frame, chunks[0], movie);
    render_content_section(frame, chunks[1], movie);
}

/// Appends "min" when the API hands back a bare number of minutes.
pub fn format_runtime(runtime: &str) -> String {
    if !runtime.is_empty() && runtime.chars().all(|c| c.is_ascii_digit()) {
        format!("{runtime} min")
    } else {
        runtime.to_string()
    }
}

fn badge<'a>(label: &'a str, value: String, color: Color) -> Vec<Span<'a>> {
    vec![
        Span::styled(label, Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
    ]
}

/// Renders the title section with basic info
fn render_title_section(frame: &mut Frame, area: Rect, movie: &MovieDetail) {
    let unknown = || "Unknown".to_string();

    let mut facts = Vec::new();
    match &movie.imdb_rating {
        Some(rating) => facts.extend(badge("★ IMDb: ", rating.clone(), get_rating_color(rating))),
        None => facts.extend(badge("★ IMDb: ", "N/A".to_string(), Color::Gray)),
    }
    facts.extend(badge(
        "Year: ",
        movie.year.clone().unwrap_or_else(unknown),
        Color::White,
    ));
    facts.extend(badge(
        "Country: ",
        movie.country.clone().unwrap_or_else(unknown),
        Color::White,
    ));
    if let Some(runtime) = &movie.runtime {
        facts.extend(badge("◷ ", format_runtime(runtime), Color::White));
    }

    let mut title = vec![Span::styled(
        movie.title.as_str(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if let Some(year) = &movie.year {
        title.push(Span::raw(" "));
        title.push(Span::styled(format!("({year})"), Style::default().fg(Color::Cyan)));
    }

    let title_paragraph = Paragraph::new(vec![Line::from(title), Line::from(facts)]);
    frame.render_widget(title_paragraph, area);
}

fn heading(label: &str) -> Line<'_> {
    Line::from(Span::styled(
        label,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn labelled<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// Renders the main content section
fn render_content_section(frame: &mut Frame, area: Rect, movie: &MovieDetail) {
    let mut content = vec![];

    if !movie.genres.is_empty() {
        let mut genres = vec![Span::styled(
            "Genres: ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];
        for name in &movie.genres {
            let style = style_for_name(name);
            genres.push(Span::styled(
                format!("{} {}", style.icon, name),
                Style::default().fg(style.color),
            ));
            genres.push(Span::raw("  "));
        }
        content.push(Line::from(genres));
        content.push(Line::from(""));
    }

    if let Some(plot) = &movie.plot {
        content.push(heading("Plot:"));
        content.push(Line::from(Span::styled(plot.as_str(), Style::default().fg(Color::White))));
        content.push(Line::from(""));
    }

    if let Some(actors) = &movie.actors {
        content.push(labelled("Actors: ", actors));
    }
    if let Some(director) = &movie.director {
        content.push(labelled("Director: ", director));
    }
    if let Some(writer) = &movie.writer {
        content.push(labelled("Writer: ", writer));
    }
    content.push(Line::from(""));

    // Ratings
    if let Some(votes) = &movie.imdb_votes {
        content.push(Line::from(vec![
            Span::styled("IMDb votes: ", Style::default().fg(Color::Gray)),
            Span::styled(votes.as_str(), Style::default().fg(Color::White)),
        ]));
    }
    if let Some(metascore) = &movie.metascore {
        content.push(Line::from(vec![
            Span::styled("Metascore: ", Style::default().fg(Color::Gray)),
            Span::styled(
                metascore.as_str(),
                Style::default()
                    .fg(get_metascore_color(metascore))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    if let Some(rated) = &movie.rated {
        content.push(labelled("Rated: ", rated));
    }
    if let Some(released) = &movie.released {
        content.push(labelled("Released: ", released));
    }
    if let Some(media_type) = &movie.media_type {
        content.push(labelled("Type: ", media_type));
    }
    if let Some(imdb_id) = &movie.imdb_id {
        content.push(labelled("IMDb id: ", imdb_id));
    }
    if !movie.images.is_empty() {
        content.push(Line::from(vec![
            Span::styled("Stills: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} available", movie.images.len()),
                Style::default().fg(Color::White),
            ),
        ]));
    }
    if let Some(awards) = &movie.awards {
        content.push(Line::from(vec![
            Span::styled("Awards: ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(awards.as_str(), Style::default().fg(Color::Yellow)),
        ]));
    }

    let content_paragraph = Paragraph::new(content).wrap(Wrap { trim: true });

    frame.render_widget(content_paragraph, area);
}

/// Helper function to get color based on IMDb rating
pub fn get_rating_color(rating: &str) -> Color {
    if let Ok(score) = rating.parse::<f32>() {
        if score >= 7.0 {
            Color::Green
        } else if score >= 5.0 {
            Color::Yellow
        } else {
            Color::Red
        }
    } else {
        Color::White
    }
}

/// Helper function to get color based on Metascore
fn get_metascore_color(score: &str) -> Color {
    if let Ok(score_val) = score.parse::<i32>() {
        if score_val >= 70 {
            Color::Green
        } else if score_val >= 50 {
            Color::Yellow
        } else {
            Color::Red
        }
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_runtimes_get_a_unit() {
        assert_eq!(format_runtime("142"), "142 min");
        assert_eq!(format_runtime("142 min"), "142 min");
        assert_eq!(format_runtime(""), "");
    }

    #[test]
    fn rating_colours() {
        assert_eq!(get_rating_color("9.3"), Color::Green);
        assert_eq!(get_rating_color("5.0"), Color::Yellow);
        assert_eq!(get_rating_color("3.1"), Color::Red);
        assert_eq!(get_rating_color("N/A"), Color::White);
        assert_eq!(get_metascore_color("80"), Color::Green);
        assert_eq!(get_metascore_color("49"), Color::Red);
    }
}
