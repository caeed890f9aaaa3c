//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line bordered input for `field`
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let accent = if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let is_placeholder = field.as_text().is_empty();
    let value_style = if is_placeholder {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    let display = if is_placeholder && field.key.kind() == FieldKind::Text && !is_active {
        "(empty)".to_string()
    } else {
        field.display_value()
    };

    // Placeholder text sits after the cursor so typing starts at column 0
    let cursor = Span::styled(if is_active { "▌" } else { "" }, Style::default().fg(accent));
    let line = if is_placeholder {
        Line::from(vec![cursor, Span::styled(display, value_style)])
    } else {
        Line::from(vec![Span::styled(display, value_style), cursor])
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(Paragraph::new(line).block(block), area);
}
