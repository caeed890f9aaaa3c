//! Profile form modal rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::FieldKey;
use crate::ui::components::render_button;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the open dialog: dimmed backdrop, panel, fields and submit button
pub fn draw_profile_dialog(frame: &mut Frame, app: &App) {
    let layout = app.modal_layout();
    let form = &app.state.form;

    // Dim whatever the page shell drew behind the backdrop
    frame
        .buffer_mut()
        .set_style(layout.backdrop, Style::default().fg(Color::DarkGray));

    frame.render_widget(Clear, layout.panel);
    let panel = Block::default()
        .title(Span::styled(
            " User Details ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(panel, layout.panel);

    for key in FieldKey::ALL {
        let is_active = form.active_key() == Some(key);
        draw_field(frame, layout.field(key), &form.fields()[key.index()], is_active);
    }

    render_button(
        frame,
        layout.submit_button,
        "Submit",
        form.is_submit_row_active(),
    );

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::styled(" next  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" submit  ", Style::default().fg(Color::DarkGray)),
        Span::styled("click outside", Style::default().fg(Color::Cyan)),
        Span::styled(" close", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(hint, layout.hint);
}
