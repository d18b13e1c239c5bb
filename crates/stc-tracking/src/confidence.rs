//! Confidence map evaluation and peak localization.

use stc_core::IVec2;

use crate::gray::GrayImage;
use crate::spectrum::{ComplexMatrix, Fft2d};

/// Apply the context filter to a patch: `Re(IFFT(FFT(patch) ⊙ filter))`.
pub fn confidence_map(fft: &Fft2d, patch: &GrayImage, filter: &ComplexMatrix) -> GrayImage {
    let spectrum = fft.forward(patch).mul_elementwise(filter);
    fft.inverse_real(&spectrum)
}

/// Maximum of a confidence map and its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Position inside the map, `(column, row)`.
    pub position: IVec2,
    pub value: f32,
}

/// Locate the maximum, keeping the first one in row-major order on ties.
///
/// Returns `None` for an empty map or one holding only NaN.
pub fn locate_peak(map: &GrayImage) -> Option<Peak> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &v) in map.data.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ if v.is_nan() => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, value)| {
        let w = map.width as usize;
        Peak {
            position: IVec2::new((i % w) as i32, (i / w) as i32),
            value,
        }
    })
}
