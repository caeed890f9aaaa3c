//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render a bordered button with centered label
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, is_selected: bool) {
    let accent = if is_selected {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let text_style = if is_selected {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let paragraph = Paragraph::new(label)
        .alignment(ratatui::layout::Alignment::Center)
        .style(text_style)
        .block(block);

    frame.render_widget(paragraph, area);
}
