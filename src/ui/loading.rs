use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use throbber_widgets_tui::{BRAILLE_SIX, Throbber, ThrobberState, WhichUse};

/// Renders a bordered panel with a spinner and a message in the middle
pub fn render_loading(
    frame: &mut Frame,
    state: &mut ThrobberState,
    area: Rect,
    title: &str,
    message: &str,
) {
    let loading_block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .style(Style::default());

    let inner = loading_block.inner(area);
    frame.render_widget(loading_block, area);

    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);
    let [_, centre, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(message.chars().count() as u16 + 2),
        Constraint::Fill(1),
    ])
    .areas(row);

    let throbber = Throbber::default()
        .label(message.to_string())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin);

    frame.render_stateful_widget(throbber, centre, state);
}
