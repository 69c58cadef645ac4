//! The widget system.
//!
//! This module provides the widget infrastructure: the [`Widget`] trait,
//! [`WidgetBase`] with common state, the event types widgets react to, and
//! the concrete widgets in [`widgets`].

pub mod base;
pub mod events;
pub mod geometry;
pub mod traits;
pub mod widgets;

pub use base::{FocusPolicy, WidgetBase};
pub use events::{
    EventBase, FocusInEvent, FocusOutEvent, FocusReason, Key, KeyPressEvent, KeyboardModifiers,
    MouseButton, MouseCancelEvent, MouseMoveEvent, MousePressEvent, MouseReleaseEvent, PaintEvent,
    ResizeEvent, WidgetEvent,
};
pub use geometry::{SizeHint, SizePolicy, SizePolicyPair};
pub use traits::{PaintContext, Widget};
