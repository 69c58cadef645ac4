//! CPU-side image buffers.
//!
//! [`Image`] holds decoded RGBA8 pixel data behind an `Arc`, so clones are
//! cheap handles to the same pixels.

use std::sync::Arc;

use crate::error::{RenderError, RenderResult};
use crate::types::Size;

/// A decoded RGBA8 image.
#[derive(Debug, Clone)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl Image {
    /// Create an image from raw RGBA8 pixels.
    ///
    /// The buffer length must be exactly `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> RenderResult<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(RenderError::InvalidPixelBuffer {
                width,
                height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels: pixels.into(),
        })
    }

    /// Decode an image from encoded bytes (PNG and friends).
    pub fn from_bytes(data: &[u8]) -> RenderResult<Self> {
        let decoded = image::load_from_memory(data)
            .map_err(|e| RenderError::ImageDecode(e.to_string()))?
            .into_rgba8();
        let (width, height) = decoded.dimensions();
        tracing::trace!(target: "clearedit_render::image", width, height, "decoded image");
        Ok(Self {
            width,
            height,
            pixels: decoded.into_raw().into(),
        })
    }

    /// Create a single-color image, mostly useful in tests.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..width as usize * height as usize {
            pixels.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            pixels: pixels.into(),
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The image size in layout units.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// The raw RGBA8 pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && (Arc::ptr_eq(&self.pixels, &other.pixels) || self.pixels == other.pixels)
    }
}

static_assertions::assert_impl_all!(Image: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba8_validates_length() {
        assert!(Image::from_rgba8(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            Image::from_rgba8(2, 2, vec![0; 15]),
            Err(RenderError::InvalidPixelBuffer { .. })
        ));
    }

    #[test]
    fn test_solid() {
        let img = Image::solid(3, 2, [1, 2, 3, 4]);
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        assert_eq!(img.pixels().len(), 24);
        assert_eq!(&img.pixels()[..4], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(matches!(
            Image::from_bytes(&[0, 1, 2, 3]),
            Err(RenderError::ImageDecode(_))
        ));
    }

    #[test]
    fn test_clone_is_same_pixels() {
        let img = Image::solid(2, 2, [9, 9, 9, 9]);
        let copy = img.clone();
        assert_eq!(img, copy);
    }
}
