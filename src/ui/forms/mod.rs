//! Form rendering module
//!
//! - `field_renderer`: single-line input rendering
//! - `profile_form`: the user details modal

mod field_renderer;
mod profile_form;

pub use profile_form::draw_profile_dialog;
