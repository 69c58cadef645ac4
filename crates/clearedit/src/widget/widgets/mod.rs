//! Concrete widgets.

pub mod clearable_line_edit;
pub mod line_edit;

pub use clearable_line_edit::{ClearIconStyle, ClearableLineEdit, EXTRA_TAP_MARGIN};
pub use line_edit::LineEdit;
