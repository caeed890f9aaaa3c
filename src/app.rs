//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{
    AppState, ClickEvent, Clock, CloseCause, ElementId, Form, ModalLayout, PageLayout,
    SystemClock,
};
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Terminal size used before the first draw (height, width)
const FALLBACK_TERMINAL_SIZE: (u16, u16) = (24, 80);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for layout calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Dialog panel width in columns
    dialog_width: u16,
    clock: Box<dyn Clock>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Create an App that reads the current time from `clock`
    pub fn with_clock(config: &TuiConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            state: AppState::new(),
            quit: false,
            terminal_size: None,
            dialog_width: config.dialog_width(),
            clock,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Full screen area
    pub fn area(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or(FALLBACK_TERMINAL_SIZE);
        Rect::new(0, 0, width, height)
    }

    pub fn page_layout(&self) -> PageLayout {
        PageLayout::new(self.area())
    }

    pub fn modal_layout(&self) -> ModalLayout {
        ModalLayout::new(self.area(), self.dialog_width)
    }

    /// The open trigger
    pub fn open_dialog(&mut self) {
        self.state.status_message = None;
        self.state.dialog.open();
    }

    /// Validate the form; close and reset on success, notify on failure
    pub fn submit(&mut self) {
        match self.state.form.validate(self.clock.as_ref()) {
            Ok(()) => {
                self.state.close_dialog(CloseCause::Submitted);
                self.state.submitted_count += 1;
                self.state.status_message = Some("Form submitted".to_string());
            }
            Err(err) => {
                tracing::warn!(field = %err.field(), "Validation failed: {}", err.reason());
                self.push_error(err.to_string());
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Global quit: Ctrl+C
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if self.state.dialog.is_open() {
            self.handle_dialog_key(key)
        } else {
            self.handle_page_key(key)
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('o') | KeyCode::Enter => self.open_dialog(),
            _ => {}
        }
        Ok(())
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) -> Result<()> {
        // Enter submits from any row and never reaches the page shell
        if key.code == KeyCode::Enter {
            self.submit();
            return Ok(());
        }

        let form = &mut self.state.form;
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                form.next_field();
                tracing::debug!("Focus moved to row {}", form.active_field());
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.prev_field();
                tracing::debug!("Focus moved to row {}", form.active_field());
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                form.type_char(c);
            }
            _ => {}
        }
        Ok(())
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return Ok(());
        };

        // Any click dismisses the notification and goes no further
        if self.state.has_errors() {
            self.state.dismiss_error();
            return Ok(());
        }

        if self.state.listeners.has_listeners() {
            let target = self.modal_layout().hit_test(mouse.column, mouse.row);
            self.handle_dialog_click(target);
        } else if self.page_layout().hit_test(mouse.column, mouse.row) == ElementId::OpenButton {
            self.open_dialog();
        }
        Ok(())
    }

    fn handle_dialog_click(&mut self, target: ElementId) {
        let event = ClickEvent::new(target, ElementId::Backdrop);
        if self.state.dialog.request_close(event) {
            self.state.form.reset();
            return;
        }
        match target {
            ElementId::Field(key) => self.state.form.focus(key),
            ElementId::SubmitButton => self.submit(),
            _ => {}
        }
    }
}
