//! Confidence prior and the spatio-temporal context filter.

use crate::gray::GrayImage;
use crate::spectrum::ComplexMatrix;

/// Gaussian-like confidence template `exp(-0.5 / alpha · distance)`.
///
/// Peaks at 1.0 in the window center and decays radially.
pub fn confidence_prior(distance: &GrayImage, alpha: f32) -> GrayImage {
    let k = -0.5 / alpha;
    GrayImage {
        data: distance.data.iter().map(|&d| (k * d).exp()).collect(),
        width: distance.width,
        height: distance.height,
    }
}

/// Learn a context filter from one observation: `prior_freq / (patch_freq + eps)`.
pub fn learn_filter(prior_freq: &ComplexMatrix, patch_freq: &ComplexMatrix, eps: f32) -> ComplexMatrix {
    prior_freq.div_elementwise(patch_freq, eps)
}

/// Blend a newly learned filter into the running one:
/// `current = (1 - rate) · current + rate · observed`.
///
/// The tracker keeps the filter learned at initialization and does not call
/// this per frame.
pub fn blend_filter(current: &mut ComplexMatrix, observed: &ComplexMatrix, rate: f32) {
    debug_assert_eq!(
        (current.width, current.height),
        (observed.width, observed.height)
    );
    let keep = 1.0 - rate;
    for (c, o) in current.data.iter_mut().zip(&observed.data) {
        *c = *c * keep + *o * rate;
    }
}
