//! Application state module

mod app_state;
mod dialog;
mod forms;
mod ui_area;

pub use app_state::*;
pub use dialog::*;
pub use forms::*;
pub use ui_area::*;
