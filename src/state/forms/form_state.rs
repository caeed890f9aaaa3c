//! Profile form state

use super::field::{FieldKey, FormField};
use super::validator::{self, Clock, ValidationError};
use chrono::{DateTime, Utc};

/// Trait for common form cursor operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Row index of the Submit button, after the four fields
pub const SUBMIT_ROW: usize = FieldKey::ALL.len();

/// The four-field profile form: username, email, phone and date of birth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    fields: [FormField; 4],
    pub active_field_index: usize,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self {
            fields: FieldKey::ALL.map(FormField::new),
            active_field_index: 0,
        }
    }

    /// Read a field's current value
    pub fn field(&self, key: FieldKey) -> &str {
        self.fields[key.index()].as_text()
    }

    /// Overwrite one field's value without any normalization
    pub fn set_field(&mut self, key: FieldKey, value: impl Into<String>) {
        self.fields[key.index()].set_text(value.into());
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Clear every field and move the cursor back to the first one
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
    }

    /// Key of the active row, `None` when the Submit button is active
    pub fn active_key(&self) -> Option<FieldKey> {
        FieldKey::from_index(self.active_field_index)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Type `c` into the active field if its input mask allows it.
    /// Returns whether the value changed.
    pub fn type_char(&mut self, c: char) -> bool {
        let Some(key) = self.active_key() else {
            return false;
        };
        let current = self.field(key);
        if !key.kind().accepts(current, c) {
            return false;
        }
        let value = format!("{current}{c}");
        self.set_field(key, value);
        true
    }

    /// Remove the last character of the active field
    pub fn backspace(&mut self) {
        if let Some(key) = self.active_key() {
            let mut value = self.field(key).to_string();
            value.pop();
            self.set_field(key, value);
        }
    }

    pub fn focus(&mut self, key: FieldKey) {
        self.set_active_field(key.index());
    }

    /// Validate against the given clock
    pub fn validate(&self, clock: &dyn Clock) -> Result<(), ValidationError> {
        self.validate_at(clock.now())
    }

    /// Validate as of `now`
    pub fn validate_at(&self, now: DateTime<Utc>) -> Result<(), ValidationError> {
        validator::validate(self, now)
    }
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ProfileForm {
    fn field_count(&self) -> usize {
        SUBMIT_ROW + 1 // four fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ProfileForm {
        let mut form = ProfileForm::new();
        form.set_field(FieldKey::Username, "alice");
        form.set_field(FieldKey::Email, "a@b.com");
        form.set_field(FieldKey::Phone, "1234567890");
        form.set_field(FieldKey::Dob, "2000-01-01");
        form
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = ProfileForm::new();
        for key in FieldKey::ALL {
            assert_eq!(form.field(key), "");
        }
        assert_eq!(form.active_field(), 0);
    }

    #[test]
    fn test_set_field_reads_back_exact_value() {
        let mut form = ProfileForm::new();
        let values = ["  alice ", " a@b ", "12 34", "2000-1-1 "];
        for (key, value) in FieldKey::ALL.into_iter().zip(values) {
            form.set_field(key, value);
            assert_eq!(form.field(key), value);
        }
    }

    #[test]
    fn test_set_field_touches_only_one_key() {
        let mut form = filled();
        form.set_field(FieldKey::Phone, "x");
        assert_eq!(form.field(FieldKey::Username), "alice");
        assert_eq!(form.field(FieldKey::Email), "a@b.com");
        assert_eq!(form.field(FieldKey::Phone), "x");
        assert_eq!(form.field(FieldKey::Dob), "2000-01-01");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled();
        form.set_active_field(3);
        form.reset();
        assert_eq!(form, ProfileForm::new());
    }

    #[test]
    fn test_next_field_wraps_through_submit_row() {
        let mut form = ProfileForm::new();
        for expected in [1, 2, 3, SUBMIT_ROW, 0] {
            form.next_field();
            assert_eq!(form.active_field(), expected);
        }
    }

    #[test]
    fn test_prev_field_wraps_to_submit_row() {
        let mut form = ProfileForm::new();
        form.prev_field();
        assert!(form.is_submit_row_active());
        assert_eq!(form.active_key(), None);
        form.prev_field();
        assert_eq!(form.active_key(), Some(FieldKey::Dob));
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = ProfileForm::new();
        form.set_active_field(99);
        assert_eq!(form.active_field(), SUBMIT_ROW);
    }

    #[test]
    fn test_type_char_edits_active_field() {
        let mut form = ProfileForm::new();
        form.focus(FieldKey::Email);
        assert!(form.type_char('a'));
        assert!(form.type_char('@'));
        assert_eq!(form.field(FieldKey::Email), "a@");
        assert_eq!(form.field(FieldKey::Username), "");
    }

    #[test]
    fn test_type_char_respects_date_mask() {
        let mut form = ProfileForm::new();
        form.focus(FieldKey::Dob);
        assert!(!form.type_char('-'));
        for c in "2024-06-14".chars() {
            assert!(form.type_char(c));
        }
        assert!(!form.type_char('1'));
        assert_eq!(form.field(FieldKey::Dob), "2024-06-14");
    }

    #[test]
    fn test_type_char_on_submit_row_is_noop() {
        let mut form = ProfileForm::new();
        form.set_active_field(SUBMIT_ROW);
        assert!(!form.type_char('z'));
        assert_eq!(form.fields(), ProfileForm::new().fields());
    }

    #[test]
    fn test_backspace() {
        let mut form = ProfileForm::new();
        form.set_field(FieldKey::Username, "ab");
        form.backspace();
        assert_eq!(form.field(FieldKey::Username), "a");
        form.backspace();
        form.backspace();
        assert_eq!(form.field(FieldKey::Username), "");
    }
}
