//! Error types for the rendering primitives.

use thiserror::Error;

/// Errors produced while loading or decoding rendering resources.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The encoded image data could not be decoded.
    #[error("failed to decode image: {0}")]
    ImageDecode(String),

    /// The image data does not match its declared format.
    #[error("image data does not match the declared format {expected:?}")]
    FormatMismatch {
        /// The format the data was declared as.
        expected: crate::embedded::ImageFormat,
    },

    /// Pixel buffer length does not match the image dimensions.
    #[error("pixel buffer of {actual} bytes does not fit {width}x{height} RGBA")]
    InvalidPixelBuffer {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
        /// The length of the provided buffer.
        actual: usize,
    },
}

/// A specialized Result type for rendering resource operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
