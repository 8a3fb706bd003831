use crate::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

/// Returns the appropriate instruction text based on app state
fn get_instruction_text(app: &App) -> &'static str {
    if app.searching {
        return "(Enter) to search, (Esc) to cancel";
    }
    if app.is_loading() {
        return "Loading... (b) back, (q) quit";
    }
    match app.current_screen() {
        CurrentScreen::Listing if app.active_query().is_some() => {
            "(←↑↓→/hjkl) move, (Enter) details, (n/p) page, (c) clear search, (g) genres, (q) quit"
        }
        CurrentScreen::Listing => {
            "(←↑↓→/hjkl) move, (Enter) details, (n/p) page, (/) search, (g) genres, (q) quit"
        }
        CurrentScreen::GenreListing => {
            "(←↑↓→/hjkl) move, (Enter) details, (n/p) page, (b) back, (H) home, (q) quit"
        }
        CurrentScreen::Genres => "(↑↓/jk) select, (Enter) open genre, (b) back, (H) home, (q) quit",
        CurrentScreen::MovieDetail => "(Esc/b) back, (r) reload, (H) home, (q) quit",
    }
}

fn status_line(app: &App) -> Line<'_> {
    if let Some(error) = &app.error {
        Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)))
    } else if let Some(updated) = app.last_updated {
        Line::from(Span::styled(
            format!("Updated {}", updated.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::default()
    }
}

/// Renders the footer with instructions at the bottom of the screen
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let bottom_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default());

    let inner = bottom_block.inner(area);
    frame.render_widget(bottom_block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Percentage(35)])
        .split(inner);

    let instructions = Paragraph::new(Text::styled(get_instruction_text(app), Style::default()));
    frame.render_widget(instructions, chunks[0]);

    let status = Paragraph::new(status_line(app)).alignment(Alignment::Right);
    frame.render_widget(status, chunks[1]);
}
