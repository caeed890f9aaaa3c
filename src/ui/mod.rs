//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    layout::draw_page(frame, app);

    if app.state.dialog.is_open() {
        forms::draw_profile_dialog(frame, app);
    }

    // Notification is drawn last so it sits above the dialog
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
