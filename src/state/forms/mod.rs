//! Form domain layer
//!
//! Field values, cursor state and the submission-time validation rules
//! for the profile form.

mod field;
mod form_state;
mod validator;

pub use field::{FieldKey, FieldKind, FormField};
pub use form_state::{Form, ProfileForm};
pub use validator::{Clock, SystemClock};

#[cfg(test)]
pub use form_state::SUBMIT_ROW;
#[cfg(test)]
pub use validator::MockClock;
