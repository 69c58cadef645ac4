//! Embedded icon support for compile-time icon data.
//!
//! This module provides [`EmbeddedIconData`] for icons that are compiled
//! directly into the binary using `include_bytes!`. This is how built-in
//! icons stay available regardless of the filesystem.
//!
//! # Example
//!
//! ```ignore
//! use clearedit_render::{EmbeddedIconData, ImageFormat};
//!
//! const CLEAR_ICON: EmbeddedIconData = EmbeddedIconData::new(
//!     include_bytes!("../assets/icons/edit-clear.png"),
//!     ImageFormat::Png,
//!     "edit-clear",
//! );
//!
//! let image = CLEAR_ICON.decode()?;
//! ```

use crate::error::{RenderError, RenderResult};
use crate::image::Image;

/// Image format for embedded icon data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// PNG format (recommended for icons)
    Png,
    /// Unknown format - will try to auto-detect
    Unknown,
}

impl ImageFormat {
    /// Detect format from file magic bytes.
    pub fn from_magic_bytes(data: &[u8]) -> Self {
        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            ImageFormat::Png
        } else {
            ImageFormat::Unknown
        }
    }
}

/// Embedded icon data that is compiled into the binary.
///
/// This struct holds a reference to static icon data that can be decoded
/// at runtime into an [`Image`]. The data itself is stored in the binary's
/// read-only data segment.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedIconData {
    /// Raw image bytes.
    data: &'static [u8],
    /// Image format hint.
    format: ImageFormat,
    /// Icon name for identification.
    name: &'static str,
}

impl EmbeddedIconData {
    /// Create new embedded icon data.
    ///
    /// This is a const function, allowing use in static/const contexts.
    pub const fn new(data: &'static [u8], format: ImageFormat, name: &'static str) -> Self {
        Self { data, format, name }
    }

    /// Get the raw image data.
    pub const fn data(&self) -> &'static [u8] {
        self.data
    }

    /// Get the image format.
    pub const fn format(&self) -> ImageFormat {
        self.format
    }

    /// Get the icon name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the size of the embedded data in bytes.
    pub const fn size(&self) -> usize {
        self.data.len()
    }

    /// Decode the embedded data into an [`Image`].
    ///
    /// When the data was declared with a concrete format, the magic bytes
    /// must agree before decoding is attempted.
    pub fn decode(&self) -> RenderResult<Image> {
        if self.format != ImageFormat::Unknown
            && ImageFormat::from_magic_bytes(self.data) != self.format
        {
            return Err(RenderError::FormatMismatch {
                expected: self.format,
            });
        }
        Image::from_bytes(self.data)
    }
}
