use crate::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

fn tab(label: &str, active: bool) -> Span<'static> {
    let style = if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(format!(" {label} "), style)
}

/// Renders the brand, navigation tabs and the current route
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default());

    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Percentage(40)])
        .split(inner);

    let screen = app.current_screen();
    let nav = Line::from(vec![
        Span::styled(
            "▶ MovieDB",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        tab("Home", screen == CurrentScreen::Listing),
        Span::raw(" "),
        tab(
            "Genres",
            matches!(screen, CurrentScreen::Genres | CurrentScreen::GenreListing),
        ),
    ]);
    frame.render_widget(Paragraph::new(nav), chunks[0]);

    let route = Paragraph::new(Line::from(Span::styled(
        app.route.to_string(),
        Style::default().fg(Color::Cyan),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(route, chunks[1]);
}
