//! Frame buffer types for caller-owned video frames.
//!
//! The tracker never writes into a `FrameBuffer`; intensity conversion always
//! produces a separate image.

use crate::error::{Result, StcError};
use serde::{Deserialize, Serialize};

/// Pixel format enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PixelFormat {
    /// 8-bit RGBA (32 bits per pixel)
    #[default]
    Rgba8,
    /// 8-bit RGB (24 bits per pixel)
    Rgb8,
    /// 8-bit BGR, the usual capture-device order
    Bgr8,
    /// 8-bit grayscale
    Gray8,
}

impl PixelFormat {
    /// Bytes per pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgba8 => 4,
            Self::Rgb8 | Self::Bgr8 => 3,
            Self::Gray8 => 1,
        }
    }

    /// Calculate total bytes needed for a tightly packed frame of this format.
    pub fn frame_size(self, width: u32, height: u32) -> usize {
        width as usize * height as usize * self.bytes_per_pixel()
    }

    /// Intensity of one pixel on the 0-255 scale (ITU-R BT.601 luma).
    #[inline]
    pub fn luma(self, px: &[u8]) -> f32 {
        let (r, g, b) = match self {
            Self::Gray8 => return px[0] as f32,
            Self::Rgba8 | Self::Rgb8 => (px[0], px[1], px[2]),
            Self::Bgr8 => (px[2], px[1], px[0]),
        };
        0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
    }
}

/// A packed video frame in CPU memory.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    /// Pixel format
    pub format: PixelFormat,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Bytes per row (may include padding)
    pub stride: usize,
    /// Raw pixel data
    pub data: Vec<u8>,
}

impl FrameBuffer {
    /// Create a zeroed, tightly packed frame buffer.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        Self {
            format,
            width,
            height,
            stride: width as usize * format.bytes_per_pixel(),
            data: vec![0u8; format.frame_size(width, height)],
        }
    }

    /// Wrap existing tightly packed pixel data.
    pub fn from_raw(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Result<Self> {
        let expected = format.frame_size(width, height);
        if data.len() != expected {
            return Err(StcError::InvalidParameter(format!(
                "{:?} frame {}x{} needs {} bytes, got {}",
                format,
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(Self {
            format,
            width,
            height,
            stride: width as usize * format.bytes_per_pixel(),
            data,
        })
    }

    /// Get a row of pixel data.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride;
        let end = start + self.width as usize * self.format.bytes_per_pixel();
        &self.data[start..end]
    }

    /// Get a mutable row of pixel data.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.stride;
        let end = start + self.width as usize * self.format.bytes_per_pixel();
        &mut self.data[start..end]
    }

    /// Dimensions as `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
