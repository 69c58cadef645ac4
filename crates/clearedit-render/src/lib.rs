//! Drawing primitives for clearedit.
//!
//! This crate provides the rendering-side vocabulary shared by the widget
//! layer:
//!
//! - **Geometry**: [`Point`], [`Size`], [`Rect`], [`Stroke`]
//! - **Color**: premultiplied RGBA [`Color`]
//! - **Fonts**: [`Font`] with a deterministic text measure
//! - **Images**: CPU-side RGBA [`Image`] buffers and decoding
//! - **Icons**: [`Icon`] with tint and state-dependent tint lists
//! - **Embedded resources**: [`EmbeddedIconData`] for compile-time icon bytes
//! - **Painting**: the [`Renderer`] trait and a recording
//!   [`DisplayListRenderer`] for headless use
//!
//! There is no GPU backend here; widgets paint through the [`Renderer`]
//! trait, and hosts decide how the recorded display list reaches a surface.

pub mod embedded;
pub mod error;
pub mod font;
pub mod icon;
pub mod image;
pub mod renderer;
pub mod types;

pub use embedded::{EmbeddedIconData, ImageFormat};
pub use error::{RenderError, RenderResult};
pub use font::{Font, FontFamily};
pub use icon::{Icon, IconState, StateColorList};
pub use image::Image;
pub use renderer::{DisplayListRenderer, DrawCommand, Renderer};
pub use types::{Color, Point, Rect, Size, Stroke};
