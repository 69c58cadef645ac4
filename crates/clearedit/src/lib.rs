//! A clearable single-line text input widget.
//!
//! The centerpiece of this crate is
//! [`ClearableLineEdit`](widget::widgets::ClearableLineEdit): a single-line
//! text field that shows a tappable clear icon on its trailing edge while it
//! contains text, and empties itself when the icon is tapped. The icon side
//! follows the layout direction of the active locale (trailing edge in
//! left-to-right layouts, mirrored in right-to-left layouts), and the tap
//! target is padded beyond the drawn icon to stay forgiving.
//!
//! The rest of the crate is the substrate the widget composes: a small
//! Qt-inspired widget system ([`widget`]), locale and text-direction queries
//! ([`platform`]), and a named icon registry ([`icons`]).
//!
//! # Example
//!
//! ```
//! use clearedit::widget::widgets::ClearableLineEdit;
//! use clearedit::platform::TextDirection;
//!
//! clearedit_core::init_global_registry();
//!
//! let mut edit = ClearableLineEdit::with_text("hello")
//!     .with_layout_direction(TextDirection::Ltr);
//!
//! // The clear icon is visible while the field has text.
//! assert!(edit.clear_icon_visible());
//!
//! edit.set_on_clear(|_edit| println!("cleared"));
//! edit.set_text("");
//! assert!(!edit.clear_icon_visible());
//! ```

pub mod icons;
pub mod platform;
pub mod widget;
