//! Context patch extraction around the target center.

use stc_core::IVec2;

use crate::gray::GrayImage;

/// Top-left frame coordinate of a `size` window centered on `center`.
#[inline]
pub fn window_origin(center: IVec2, size: IVec2) -> IVec2 {
    center - size / 2
}

/// Crop a `size` window centered on `center`, replicating edge pixels for
/// samples that fall outside the frame.
pub fn crop_clamped(frame: &GrayImage, center: IVec2, size: IVec2) -> GrayImage {
    let origin = window_origin(center, size);
    GrayImage::from_fn(size.x as u32, size.y as u32, |x, y| {
        frame.get(origin.x + x as i32, origin.y + y as i32)
    })
}

/// Build the context patch: clamped crop, mean removed, weighted by `weights`.
///
/// `weights` fixes the patch size. A window lying entirely outside the frame
/// replicates a single edge pixel and comes back as all zeros.
pub fn extract_context(frame: &GrayImage, center: IVec2, weights: &GrayImage) -> GrayImage {
    let mut patch = crop_clamped(frame, center, weights.size());
    let mean = patch.mean();
    for (v, &w) in patch.data.iter_mut().zip(&weights.data) {
        *v = (*v - mean) * w;
    }
    patch
}
