//! Page shell: title bar, open trigger and status bar

use super::components::render_button;
use crate::app::App;
use crate::state::PageLayout;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the page behind the dialog
pub fn draw_page(frame: &mut Frame, app: &App) {
    let layout = app.page_layout();

    let title = Paragraph::new(Line::from(Span::styled(
        " xmodal",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(title, layout.title_bar);

    render_button(frame, layout.open_button, "Open Form", false);

    draw_status_bar(frame, app, layout);
}

fn draw_status_bar(frame: &mut Frame, app: &App, layout: PageLayout) {
    let mut spans = vec![Span::styled(
        get_hints(app),
        Style::default().fg(Color::DarkGray),
    )];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    if app.state.submitted_count > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} submitted", app.state.submitted_count),
            Style::default().fg(Color::Blue),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), layout.status_bar);
}

/// Key hints for the current state
fn get_hints(app: &App) -> &'static str {
    if app.state.has_errors() {
        " Enter/Esc: dismiss"
    } else if app.state.dialog.is_open() {
        " Tab/↑↓: move | Enter: submit | click outside: close | Ctrl+C: quit"
    } else {
        " o/Enter: open form | q: quit"
    }
}
