//! Application state definitions

use super::dialog::{CloseCause, DialogController, ListenerRegistry};
use super::forms::ProfileForm;
use std::collections::VecDeque;

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// Pointer listeners registered by open dialogs
    pub listeners: ListenerRegistry,
    pub dialog: DialogController,
    pub form: ProfileForm,
    /// Blocking notifications, shown one at a time
    error_queue: VecDeque<String>,
    /// Transient message in the status bar
    pub status_message: Option<String>,
    /// Number of forms submitted successfully this session
    pub submitted_count: usize,
}

impl AppState {
    pub fn new() -> Self {
        let listeners = ListenerRegistry::new();
        Self {
            dialog: DialogController::new(listeners.clone()),
            listeners,
            form: ProfileForm::new(),
            error_queue: VecDeque::new(),
            status_message: None,
            submitted_count: 0,
        }
    }

    /// Close the dialog and clear the form
    pub fn close_dialog(&mut self, cause: CloseCause) {
        self.dialog.close(cause);
        self.form.reset();
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The notification currently on screen
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
