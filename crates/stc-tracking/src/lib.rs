//! STC Tracking - Spatio-temporal context visual tracking.
//!
//! A single target is tracked by learning a frequency-domain filter that maps
//! the weighted neighborhood of the target onto a fixed confidence prior. Each
//! frame the filter is applied to the new neighborhood, the target moves to the
//! confidence peak, and the target size drifts with a smoothed ratio of recent
//! peak magnitudes.

pub mod confidence;
pub mod context;
pub mod gray;
pub mod model;
pub mod params;
pub mod scale;
pub mod spectrum;
pub mod tracker;
pub mod window;

#[cfg(test)]
pub(crate) mod test_utils;

pub use confidence::{confidence_map, locate_peak, Peak};
pub use context::{crop_clamped, extract_context, window_origin};
pub use gray::{frame_to_gray, AsGray, GrayImage};
pub use model::{blend_filter, confidence_prior, learn_filter};
pub use params::StcParams;
pub use scale::{estimate_scale, floor_mod, mean_ratio, ConfidenceHistory, MIN_CONFIDENCE};
pub use spectrum::{ComplexMatrix, Fft2d};
pub use tracker::{StcTracker, TrackerState};
pub use window::{distance_map, hamming_window, weight_window};
