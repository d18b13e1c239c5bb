//! Fixed spatial windows over the context region.

use std::f32::consts::PI;

use crate::gray::GrayImage;

/// Separable 2D Hamming window, `0.54 - 0.46 cos(2πn / (N - 1))` per axis.
pub fn hamming_window(width: u32, height: u32) -> GrayImage {
    let wx = hamming_1d(width);
    let wy = hamming_1d(height);
    GrayImage::from_fn(width, height, |x, y| wy[y as usize] * wx[x as usize])
}

fn hamming_1d(n: u32) -> Vec<f32> {
    if n <= 1 {
        return vec![1.0; n as usize];
    }
    let denom = (n - 1) as f32;
    (0..n)
        .map(|i| 0.54 - 0.46 * (2.0 * PI * i as f32 / denom).cos())
        .collect()
}

/// Normalized radial distance from the window center.
///
/// Cell `(j, i)` holds `sqrt(ti² + tj²)` with `ti = (2i - H) / H` and
/// `tj = (2j - W) / W`, so the center is 0 and the edge midpoints are 1.
pub fn distance_map(width: u32, height: u32) -> GrayImage {
    let (w, h) = (width as f32, height as f32);
    GrayImage::from_fn(width, height, |x, y| {
        let ti = (2.0 * y as f32 - h) / h;
        let tj = (2.0 * x as f32 - w) / w;
        (ti * ti + tj * tj).sqrt()
    })
}

/// Frequency-effect reducer: `hamming ⊙ exp(-0.5 / f² · distance)`, scaled to
/// sum to one.
///
/// The Gaussian bandwidth `f` follows the target's scale, so the window is
/// rebuilt every frame.
pub fn weight_window(hamming: &GrayImage, distance: &GrayImage, bandwidth: f32) -> GrayImage {
    let k = -0.5 / (bandwidth * bandwidth);
    let mut window = GrayImage {
        data: hamming
            .data
            .iter()
            .zip(&distance.data)
            .map(|(&hw, &d)| hw * (k * d).exp())
            .collect(),
        width: hamming.width,
        height: hamming.height,
    };
    let total = window.sum();
    if total > f32::MIN_POSITIVE {
        let inv = 1.0 / total;
        window.data.iter_mut().for_each(|v| *v *= inv);
    }
    window
}
