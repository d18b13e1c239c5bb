//! Single-channel f32 images and intensity conversion.

use std::borrow::Cow;

use stc_core::{FrameBuffer, IVec2};

/// A single-channel image stored as f32 values.
///
/// Frames converted from 8-bit sources keep the 0-255 intensity scale. The
/// same type carries context patches, windows and confidence maps.
#[derive(Debug, Clone, PartialEq)]
pub struct GrayImage {
    pub data: Vec<f32>,
    pub width: u32,
    pub height: u32,
}

impl GrayImage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0.0; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Build an image by evaluating `f(x, y)` for every pixel in row-major order.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> f32) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Sample with coordinates clamped to the nearest valid row/column.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> f32 {
        let x = x.clamp(0, self.width as i32 - 1) as usize;
        let y = y.clamp(0, self.height as i32 - 1) as usize;
        self.data[y * self.width as usize + x]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, val: f32) {
        if x < self.width && y < self.height {
            self.data[(y * self.width + x) as usize] = val;
        }
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width as i32, self.height as i32)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn mean(&self) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().map(|&v| v as f64).sum::<f64>() as f32 / self.data.len() as f32
    }

    pub fn sum(&self) -> f32 {
        self.data.iter().map(|&v| v as f64).sum::<f64>() as f32
    }
}

/// Convert a packed 8-bit frame to intensity on the 0-255 scale.
pub fn frame_to_gray(frame: &FrameBuffer) -> GrayImage {
    let bpp = frame.format.bytes_per_pixel();
    let w = frame.width as usize;
    let mut gray = GrayImage::new(frame.width, frame.height);
    for y in 0..frame.height {
        let row = frame.row(y);
        let out = &mut gray.data[y as usize * w..(y as usize + 1) * w];
        for (dst, px) in out.iter_mut().zip(row.chunks_exact(bpp)) {
            *dst = frame.format.luma(px);
        }
    }
    gray
}

/// Anything the tracker can read as a single intensity channel.
///
/// Implementors must not hand out their own buffer mutably: the tracker only
/// ever reads through the returned `Cow`.
pub trait AsGray {
    fn dimensions(&self) -> (u32, u32);
    fn as_gray(&self) -> Cow<'_, GrayImage>;
}

impl AsGray for GrayImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn as_gray(&self) -> Cow<'_, GrayImage> {
        Cow::Borrowed(self)
    }
}

impl AsGray for FrameBuffer {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn as_gray(&self) -> Cow<'_, GrayImage> {
        Cow::Owned(frame_to_gray(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stc_core::PixelFormat;

    #[test]
    fn test_gray_image() {
        let mut img = GrayImage::new(4, 4);
        img.set(2, 3, 0.75);
        assert!((img.get(2, 3) - 0.75).abs() < 0.001);
        assert_eq!(img.get(-1, -1), img.get(0, 0));
        assert_eq!(img.get(100, 100), img.get(3, 3));
    }

    #[test]
    fn test_from_fn_row_major() {
        let img = GrayImage::from_fn(3, 2, |x, y| (y * 3 + x) as f32);
        assert_eq!(img.data, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((img.mean() - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_rgba_to_gray() {
        let frame = FrameBuffer::from_raw(1, 1, PixelFormat::Rgba8, vec![255, 255, 255, 255]).unwrap();
        let gray = frame_to_gray(&frame);
        assert!((gray.data[0] - 255.0).abs() < 0.01);
    }

    #[test]
    fn test_conversion_leaves_frame_untouched() {
        let data: Vec<u8> = (0..4 * 3 * 3).map(|v| v as u8).collect();
        let frame = FrameBuffer::from_raw(4, 3, PixelFormat::Bgr8, data.clone()).unwrap();
        let gray = frame.as_gray();
        assert_eq!(gray.dimensions(), (4, 3));
        assert_eq!(frame.data, data);
    }

    #[test]
    fn test_gray_passthrough_borrows() {
        let img = GrayImage::new(2, 2);
        assert!(matches!(img.as_gray(), Cow::Borrowed(_)));
    }
}
