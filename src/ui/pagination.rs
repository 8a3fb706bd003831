use crate::app::pagination::{can_go_next, can_go_prev, page_window};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

fn arrow(label: &'static str, enabled: bool) -> Span<'static> {
    if enabled {
        Span::styled(label, Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
    } else {
        Span::styled(label, Style::default().fg(Color::DarkGray))
    }
}

pub fn pagination_line(page: u32, total: u32, summary: Option<String>) -> Line<'static> {
    let mut spans = vec![arrow("◀ (p) prev", can_go_prev(page)), Span::raw("  ")];

    for number in page_window(page, total) {
        if number == page {
            spans.push(Span::styled(
                format!(" {number} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(format!(" {number} "), Style::default().fg(Color::Gray)));
        }
    }

    spans.push(Span::raw("  "));
    spans.push(arrow("next (n) ▶", can_go_next(page, total)));
    spans.push(Span::styled(
        format!("   Page {page} of {total}"),
        Style::default().fg(Color::Cyan),
    ));
    if let Some(summary) = summary {
        spans.push(Span::styled(
            format!(" · {summary}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

/// Renders the page strip below a gallery
pub fn render_pagination(
    frame: &mut Frame,
    page: u32,
    total: u32,
    summary: Option<String>,
    area: Rect,
) {
    let pager = Paragraph::new(pagination_line(page, total, summary))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(pager, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn shows_window_and_position() {
        let line = pagination_line(10, 25, None);
        let rendered = text(&line);
        assert!(rendered.contains(" 8  9  10  11  12 "));
        assert!(rendered.ends_with("Page 10 of 25"));

        let line = pagination_line(10, 25, Some("91-100 of 250 movies".into()));
        assert!(text(&line).ends_with("Page 10 of 25 · 91-100 of 250 movies"));
    }

    #[test]
    fn prev_is_dimmed_on_the_first_page() {
        let line = pagination_line(1, 3, None);
        assert_eq!(line.spans[0].style.fg, Some(Color::DarkGray));
        let next = line
            .spans
            .iter()
            .find(|s| s.content.contains("next"))
            .unwrap();
        assert_eq!(next.style.fg, Some(Color::White));
    }
}
