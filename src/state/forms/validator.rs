//! Submission-time validation rules for the profile form
//!
//! Rules run in a fixed order and the first failure is returned:
//! email format, phone format, date of birth, then completeness.
//! Format rules only apply to non-empty fields; an empty field is
//! caught by the completeness rule, which runs last.

use super::field::{FieldKey, FieldKind};
use super::form_state::ProfileForm;
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Wire format of the date input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Required length of a phone number
pub const PHONE_LEN: usize = 10;

/// A user-correctable validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid email. Please check your email address.")]
    InvalidEmail,
    #[error("Invalid phone number. Please enter a 10-digit phone number.")]
    InvalidPhone,
    #[error("Invalid date of birth. Date cannot be in the future.")]
    FutureDate,
    #[error("Please fill in the {0} field")]
    MissingField(FieldKey),
}

impl ValidationError {
    /// The field the failure refers to
    pub fn field(&self) -> FieldKey {
        match self {
            ValidationError::InvalidEmail => FieldKey::Email,
            ValidationError::InvalidPhone => FieldKey::Phone,
            ValidationError::FutureDate => FieldKey::Dob,
            ValidationError::MissingField(key) => *key,
        }
    }

    /// Short machine-friendly reason, used in logs
    pub fn reason(&self) -> String {
        match self {
            ValidationError::InvalidEmail => "invalid email".to_string(),
            ValidationError::InvalidPhone => "invalid phone".to_string(),
            ValidationError::FutureDate => "future date".to_string(),
            ValidationError::MissingField(key) => format!("missing field: {key}"),
        }
    }
}

/// Source of the current moment for the date-of-birth rule
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Run all rules against `form` as of `now`
pub fn validate(form: &ProfileForm, now: DateTime<Utc>) -> Result<(), ValidationError> {
    let email = form.field(FieldKey::Email);
    if !email.is_empty() && !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    let phone = form.field(FieldKey::Phone);
    if !phone.is_empty() && !is_valid_phone(phone) {
        return Err(ValidationError::InvalidPhone);
    }

    let dob = form.field(FieldKey::Dob);
    if !dob.is_empty() && !is_past_or_present(dob, now) {
        return Err(ValidationError::FutureDate);
    }

    for key in FieldKey::ALL {
        if is_blank(form.field(key)) {
            return Err(ValidationError::MissingField(key));
        }
    }

    Ok(())
}

/// Blank means nothing but whitespace or byte-order marks
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .is_empty()
}

fn is_valid_phone(phone: &str) -> bool {
    phone.chars().count() == PHONE_LEN && phone.chars().all(|c| c.is_ascii_digit())
}

/// A date is accepted when it has the exact `YYYY-MM-DD` shape, parses, and
/// its midnight (UTC) is not after `now`. Anything else is never accepted.
fn is_past_or_present(dob: &str, now: DateTime<Utc>) -> bool {
    if !FieldKind::is_complete_date(dob) {
        return false;
    }
    NaiveDate::parse_from_str(dob, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .is_some_and(|midnight| midnight.and_utc() <= now)
}
