//! Screen geometry shared by rendering and mouse hit testing
//!
//! Both the renderer and the mouse handler compute rects through this module,
//! so a click always resolves to the element drawn under it.
//!
//! # Layout
//!
//! ```text
//! Row 0-2:  Title bar (3 rows with borders)
//! Row 3-5:  "Open Form" button
//! Bottom:   Status bar (1 row)
//!
//! While open, the whole screen is the backdrop with a centered panel:
//!   border
//!   4 x field (3 rows each, bordered)
//!   submit button (3 rows)
//!   hint (1 row)
//!   border
//! ```

use crate::state::{ElementId, FieldKey};
use ratatui::layout::{Position, Rect};

/// Height of the title bar (with borders: top + content + bottom)
pub const TITLE_BAR_HEIGHT: u16 = 3;

/// Height of a bordered single-line input
pub const FIELD_HEIGHT: u16 = 3;

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

const OPEN_BUTTON_WIDTH: u16 = 15;
const SUBMIT_BUTTON_WIDTH: u16 = 12;
const HINT_HEIGHT: u16 = 1;

/// Panel height: borders, four fields, submit button and hint line
pub const PANEL_HEIGHT: u16 = 2 + FIELD_HEIGHT * 4 + BUTTON_HEIGHT + HINT_HEIGHT;

/// Geometry of the page shell behind the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub title_bar: Rect,
    pub open_button: Rect,
    pub status_bar: Rect,
}

impl PageLayout {
    pub fn new(area: Rect) -> Self {
        let title_bar = Rect {
            height: TITLE_BAR_HEIGHT.min(area.height),
            ..area
        };
        let open_button = Rect {
            x: area.x + 1,
            y: area.y + TITLE_BAR_HEIGHT,
            width: OPEN_BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
        }
        .intersection(area);
        let status_bar = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(1),
            width: area.width,
            height: area.height.min(1),
        };
        Self {
            title_bar,
            open_button,
            status_bar,
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> ElementId {
        if self.open_button.contains(Position::new(column, row)) {
            ElementId::OpenButton
        } else {
            ElementId::Page
        }
    }
}

/// Geometry of the open modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    pub backdrop: Rect,
    pub panel: Rect,
    pub fields: [Rect; 4],
    pub submit_button: Rect,
    pub hint: Rect,
}

impl ModalLayout {
    /// Center a panel of `panel_width` columns in `area`
    pub fn new(area: Rect, panel_width: u16) -> Self {
        let width = panel_width.min(area.width);
        let height = PANEL_HEIGHT.min(area.height);
        let panel = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        // Inside the border, with one column of horizontal padding
        let inner_x = panel.x + 2;
        let inner_y = panel.y + 1;
        let inner_width = panel.width.saturating_sub(4);

        let fields = FieldKey::ALL.map(|key| {
            Rect {
                x: inner_x,
                y: inner_y + key.index() as u16 * FIELD_HEIGHT,
                width: inner_width,
                height: FIELD_HEIGHT,
            }
            .intersection(panel)
        });
        let submit_button = Rect {
            x: inner_x,
            y: inner_y + 4 * FIELD_HEIGHT,
            width: SUBMIT_BUTTON_WIDTH.min(inner_width),
            height: BUTTON_HEIGHT,
        }
        .intersection(panel);
        let hint = Rect {
            x: inner_x,
            y: inner_y + 4 * FIELD_HEIGHT + BUTTON_HEIGHT,
            width: inner_width,
            height: HINT_HEIGHT,
        }
        .intersection(panel);

        Self {
            backdrop: area,
            panel,
            fields,
            submit_button,
            hint,
        }
    }

    pub fn field(&self, key: FieldKey) -> Rect {
        self.fields[key.index()]
    }

    /// Innermost element under the given cell
    pub fn hit_test(&self, column: u16, row: u16) -> ElementId {
        let pos = Position::new(column, row);
        if self.submit_button.contains(pos) {
            return ElementId::SubmitButton;
        }
        if let Some(key) = FieldKey::ALL
            .into_iter()
            .find(|key| self.field(*key).contains(pos))
        {
            return ElementId::Field(key);
        }
        if self.panel.contains(pos) {
            ElementId::Content
        } else {
            ElementId::Backdrop
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn screen() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn test_panel_height() {
        assert_eq!(PANEL_HEIGHT, 18);
    }

    #[test]
    fn test_panel_is_centered() {
        let layout = ModalLayout::new(screen(), 50);
        assert_eq!(layout.panel, Rect::new(15, 3, 50, 18));
        assert_eq!(layout.backdrop, screen());
    }

    #[test]
    fn test_fields_stack_inside_panel() {
        let layout = ModalLayout::new(screen(), 50);
        assert_eq!(layout.field(FieldKey::Username), Rect::new(17, 4, 46, 3));
        assert_eq!(layout.field(FieldKey::Email), Rect::new(17, 7, 46, 3));
        assert_eq!(layout.field(FieldKey::Phone), Rect::new(17, 10, 46, 3));
        assert_eq!(layout.field(FieldKey::Dob), Rect::new(17, 13, 46, 3));
        assert_eq!(layout.submit_button, Rect::new(17, 16, 12, 3));
        assert_eq!(layout.hint, Rect::new(17, 19, 46, 1));
    }

    #[test]
    fn test_hit_test_resolves_innermost_element() {
        let layout = ModalLayout::new(screen(), 50);
        assert_eq!(layout.hit_test(0, 0), ElementId::Backdrop);
        assert_eq!(layout.hit_test(79, 23), ElementId::Backdrop);
        // Panel border
        assert_eq!(layout.hit_test(15, 3), ElementId::Content);
        assert_eq!(layout.hit_test(20, 5), ElementId::Field(FieldKey::Username));
        assert_eq!(layout.hit_test(20, 14), ElementId::Field(FieldKey::Dob));
        assert_eq!(layout.hit_test(18, 17), ElementId::SubmitButton);
        // Beside the submit button, still inside the panel
        assert_eq!(layout.hit_test(40, 17), ElementId::Content);
        // Just left of the panel
        assert_eq!(layout.hit_test(14, 10), ElementId::Backdrop);
    }

    #[test]
    fn test_panel_clamped_to_small_area() {
        let layout = ModalLayout::new(Rect::new(0, 0, 30, 10), 50);
        assert_eq!(layout.panel, Rect::new(0, 0, 30, 10));
        for rect in layout.fields {
            assert!(layout.panel.intersection(rect) == rect);
        }
    }

    #[test]
    fn test_page_hit_test() {
        let page = PageLayout::new(screen());
        assert_eq!(page.open_button, Rect::new(1, 3, 15, 3));
        assert_eq!(page.hit_test(5, 4), ElementId::OpenButton);
        assert_eq!(page.hit_test(5, 1), ElementId::Page);
        assert_eq!(page.hit_test(20, 4), ElementId::Page);
        assert_eq!(page.status_bar, Rect::new(0, 23, 80, 1));
    }
}
