//! Shared synthetic scenes for unit tests.

use crate::gray::GrayImage;

/// Deterministic broadband texture on the 0-255 scale.
///
/// Values come from an integer hash of the pixel position, so the spectrum
/// has no structural zeros.
pub(crate) fn noise_texture(width: u32, height: u32, seed: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| hash_pixel(x, y, seed))
}

/// `noise_texture` circularly shifted by `(dx, dy)` pixels.
pub(crate) fn shifted_texture(width: u32, height: u32, seed: u32, dx: i32, dy: i32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        let sx = (x as i32 - dx).rem_euclid(width as i32) as u32;
        let sy = (y as i32 - dy).rem_euclid(height as i32) as u32;
        hash_pixel(sx, sy, seed)
    })
}

/// Dark frame with a bright axis-aligned square of side `side` whose
/// top-left corner is `(left, top)`.
pub(crate) fn square_scene(width: u32, height: u32, left: u32, top: u32, side: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        let inside = (left..left + side).contains(&x) && (top..top + side).contains(&y);
        if inside {
            220.0
        } else {
            20.0
        }
    })
}

fn hash_pixel(x: u32, y: u32, seed: u32) -> f32 {
    let mut h = x
        .wrapping_mul(0x9E37_79B1)
        .wrapping_add(y.wrapping_mul(0x85EB_CA77))
        .wrapping_add(seed.wrapping_mul(0xC2B2_AE3D));
    h ^= h >> 15;
    h = h.wrapping_mul(0x2C1B_3C6D);
    h ^= h >> 12;
    (h % 256) as f32
}
