//! Form field value objects

use std::fmt;

/// Identifier of one of the four profile form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Username,
    Email,
    Phone,
    Dob,
}

impl FieldKey {
    /// All keys in the fixed order used for rendering and completeness checks
    pub const ALL: [FieldKey; 4] = [
        FieldKey::Username,
        FieldKey::Email,
        FieldKey::Phone,
        FieldKey::Dob,
    ];

    /// Stable identifier, equal to the field's key name
    pub fn name(self) -> &'static str {
        match self {
            FieldKey::Username => "username",
            FieldKey::Email => "email",
            FieldKey::Phone => "phone",
            FieldKey::Dob => "dob",
        }
    }

    /// Label shown above the input
    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Username => "Username",
            FieldKey::Email => "Email",
            FieldKey::Phone => "Phone Number",
            FieldKey::Dob => "Date of Birth",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldKey::Dob => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }

    /// Position of this key in [`FieldKey::ALL`]
    pub fn index(self) -> usize {
        match self {
            FieldKey::Username => 0,
            FieldKey::Email => 1,
            FieldKey::Phone => 2,
            FieldKey::Dob => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input behavior of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Date-only input in `YYYY-MM-DD` form
    Date,
}

/// Length of a complete date value (`YYYY-MM-DD`)
pub const DATE_INPUT_LEN: usize = 10;

/// Positions of the `-` separators in a date value
const DATE_SEPARATORS: [usize; 2] = [4, 7];

impl FieldKind {
    /// Whether typing `c` after `current` is allowed.
    ///
    /// Date input follows the `YYYY-MM-DD` mask: digits everywhere except
    /// the separator positions, which only take `-`.
    pub fn accepts(self, current: &str, c: char) -> bool {
        match self {
            FieldKind::Text => true,
            FieldKind::Date => {
                let position = current.chars().count();
                if position >= DATE_INPUT_LEN {
                    false
                } else if DATE_SEPARATORS.contains(&position) {
                    c == '-'
                } else {
                    c.is_ascii_digit()
                }
            }
        }
    }

    /// Whether `value` has the complete `YYYY-MM-DD` shape
    pub fn is_complete_date(value: &str) -> bool {
        value.len() == DATE_INPUT_LEN
            && value.char_indices().all(|(i, c)| {
                if DATE_SEPARATORS.contains(&i) {
                    c == '-'
                } else {
                    c.is_ascii_digit()
                }
            })
    }
}

/// A single form field with its key and current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: FieldKey,
    value: String,
}

impl FormField {
    /// Create an empty field
    pub fn new(key: FieldKey) -> Self {
        Self {
            key,
            value: String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.key.label()
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Overwrite the value as-is
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Value shown in the input, with a placeholder for empty date fields
    pub fn display_value(&self) -> String {
        if self.value.is_empty() && self.key.kind() == FieldKind::Date {
            "YYYY-MM-DD".to_string()
        } else {
            self.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_match_identifiers() {
        let names: Vec<_> = FieldKey::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, vec!["username", "email", "phone", "dob"]);
    }

    #[test]
    fn test_index_round_trips_through_all() {
        for (i, key) in FieldKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
            assert_eq!(FieldKey::from_index(i), Some(*key));
        }
        assert_eq!(FieldKey::from_index(4), None);
    }

    #[test]
    fn test_display_uses_key_name() {
        assert_eq!(FieldKey::Dob.to_string(), "dob");
    }

    #[test]
    fn test_text_kind_accepts_anything() {
        for c in [' ', 'a', '@', '1', '-'] {
            assert!(FieldKind::Text.accepts("anything", c));
        }
    }

    #[test]
    fn test_date_kind_follows_mask() {
        let date = FieldKind::Date;
        assert!(date.accepts("", '2'));
        assert!(!date.accepts("", '-'));
        assert!(!date.accepts("", 'x'));
        assert!(date.accepts("2024", '-'));
        assert!(!date.accepts("2024", '0'));
        assert!(date.accepts("2024-0", '6'));
        assert!(!date.accepts("2024-06", '1'));
        assert!(date.accepts("2024-06", '-'));
        assert!(!date.accepts("2024-06-1", '-'));
        assert!(!date.accepts("2024-06-14", '1'));
    }

    #[test]
    fn test_complete_date_shape() {
        assert!(FieldKind::is_complete_date("2024-06-14"));
        assert!(!FieldKind::is_complete_date("-2024-06-14"));
        assert!(!FieldKind::is_complete_date("2024-6-5"));
        assert!(!FieldKind::is_complete_date("2024/06/14"));
        assert!(!FieldKind::is_complete_date("2024-06-1x"));
        assert!(!FieldKind::is_complete_date(""));
    }

    #[test]
    fn test_set_text_and_clear() {
        let mut field = FormField::new(FieldKey::Dob);
        field.set_text("not a date".to_string());
        assert_eq!(field.as_text(), "not a date");
        field.clear();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_date_placeholder() {
        assert_eq!(FormField::new(FieldKey::Dob).display_value(), "YYYY-MM-DD");
        assert_eq!(FormField::new(FieldKey::Phone).display_value(), "");
    }
}
