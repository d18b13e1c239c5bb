//! Spatio-temporal context tracker: session state and the per-frame update.

use stc_core::{BoundingBox, IVec2, Rect, Result, StcError, Vec2};
use tracing::{debug, info, warn};

use crate::confidence::{confidence_map, locate_peak};
use crate::context::{extract_context, window_origin};
use crate::gray::{AsGray, GrayImage};
use crate::model::{blend_filter, confidence_prior, learn_filter};
use crate::params::StcParams;
use crate::scale::{estimate_scale, floor_mod, ConfidenceHistory};
use crate::spectrum::{ComplexMatrix, Fft2d};
use crate::window::{distance_map, hamming_window, weight_window};

/// All persistent state of one tracking session.
///
/// Created from the first frame by [`TrackerState::initialize`] and advanced
/// one frame at a time by [`TrackerState::update`]. The context size, windows,
/// prior and tracking filter are fixed at initialization.
#[derive(Debug, Clone)]
pub struct TrackerState {
    params: StcParams,
    frame_size: (u32, u32),
    center: IVec2,
    target_size: Vec2,
    context_size: IVec2,
    sigma: f32,
    scale: f32,
    distance_map: GrayImage,
    confidence_prior: GrayImage,
    confidence_prior_freq: ComplexMatrix,
    hamming_window: GrayImage,
    weight_window: GrayImage,
    tracking_filter: ComplexMatrix,
    confidence_history: ConfidenceHistory,
    frame_counter: usize,
    fft: Fft2d,
}

impl TrackerState {
    /// Learn the context model from the first frame and the selected box.
    pub fn initialize(initial_box: BoundingBox, frame: &impl AsGray, params: StcParams) -> Result<Self> {
        params.validate()?;
        if !initial_box.has_area() {
            return Err(StcError::InvalidSelection {
                width: initial_box.width,
                height: initial_box.height,
            });
        }
        let frame_size = frame.dimensions();
        if frame_size.0 == 0 || frame_size.1 == 0 {
            return Err(StcError::InvalidParameter(format!(
                "empty frame {}x{}",
                frame_size.0, frame_size.1
            )));
        }
        let target_size = Vec2::new(initial_box.width as f32, initial_box.height as f32);
        let context_size = IVec2::new(
            ((target_size.x * (1.0 + params.padding)) as i32).max(1),
            ((target_size.y * (1.0 + params.padding)) as i32).max(1),
        );
        // Context samples are addressed as center +/- context size in i32.
        let center = initial_box
            .center()
            .filter(|c| within_reach(c.x, context_size.x) && within_reach(c.y, context_size.y))
            .ok_or(StcError::InvalidSelection {
                width: initial_box.width,
                height: initial_box.height,
            })?;
        let gray = frame.as_gray();
        let (cw, ch) = (context_size.x as u32, context_size.y as u32);

        let hamming_window = hamming_window(cw, ch);
        let distance_map = distance_map(cw, ch);
        let fft = Fft2d::new(cw as usize, ch as usize);
        let confidence_prior = confidence_prior(&distance_map, params.alpha);
        let confidence_prior_freq = fft.forward(&confidence_prior);

        let sigma = (target_size.x + target_size.y) * 0.5;
        let weight_window = weight_window(&hamming_window, &distance_map, sigma);

        let patch = extract_context(&gray, center, &weight_window);
        let tracking_filter = learn_filter(&confidence_prior_freq, &fft.forward(&patch), params.eps);

        info!(
            x = initial_box.x,
            y = initial_box.y,
            width = initial_box.width,
            height = initial_box.height,
            context_width = cw,
            context_height = ch,
            "STC tracker initialized"
        );

        Ok(Self {
            confidence_history: ConfidenceHistory::new(params.history_len),
            params,
            frame_size,
            center,
            target_size,
            context_size,
            sigma,
            scale: 1.0,
            distance_map,
            confidence_prior,
            confidence_prior_freq,
            hamming_window,
            weight_window,
            tracking_filter,
            frame_counter: 0,
            fft,
        })
    }

    /// Track the target into `frame` and return its new bounding box.
    pub fn update(&mut self, frame: &impl AsGray) -> Result<BoundingBox> {
        self.check_frame(frame)?;
        let gray = frame.as_gray();

        self.sigma *= self.scale;
        self.weight_window = weight_window(&self.hamming_window, &self.distance_map, self.sigma);

        let map = self.evaluate(&gray, self.center);
        if let Some(peak) = locate_peak(&map) {
            self.center = window_origin(self.center, self.context_size) + peak.position;
        }

        let peak_value = locate_peak(&self.evaluate(&gray, self.center)).map_or(0.0, |p| p.value);
        self.confidence_history.record(self.frame_counter, peak_value);

        let n = self.confidence_history.len();
        self.frame_counter += 1;
        if self.frame_counter % n == 0 {
            let newest = floor_mod(self.frame_counter as i64 - 1, n);
            match estimate_scale(
                self.confidence_history.values(),
                newest,
                self.scale,
                self.params.lambda,
            ) {
                Ok(scale) => self.scale = scale,
                Err(e) => warn!(error = %e, scale = self.scale, "Scale estimate skipped, holding scale"),
            }
            self.frame_counter = 0;
        }

        self.target_size *= self.scale;

        let bbox = self.bounding_box();
        debug!(
            cx = self.center.x,
            cy = self.center.y,
            scale = self.scale,
            confidence = peak_value,
            "Frame tracked"
        );
        Ok(bbox)
    }

    /// Re-learn the filter at the current center and blend it in with the
    /// configured learning rate. `update` never calls this; the filter stays
    /// as learned at initialization unless the caller opts in.
    pub fn refresh_filter(&mut self, frame: &impl AsGray) -> Result<()> {
        self.check_frame(frame)?;
        let gray = frame.as_gray();
        let patch = extract_context(&gray, self.center, &self.weight_window);
        let observed = learn_filter(
            &self.confidence_prior_freq,
            &self.fft.forward(&patch),
            self.params.eps,
        );
        blend_filter(&mut self.tracking_filter, &observed, self.params.learning_rate);
        Ok(())
    }

    /// Current box: top-left `center - size / 2` (truncated), size rounded.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            self.center.x - (self.target_size.x * 0.5) as i32,
            self.center.y - (self.target_size.y * 0.5) as i32,
            self.target_size.x.round() as i32,
            self.target_size.y.round() as i32,
        )
    }

    /// Sub-pixel target extent around the current center.
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.center.as_vec2(), self.target_size)
    }

    fn evaluate(&self, gray: &GrayImage, center: IVec2) -> GrayImage {
        let patch = extract_context(gray, center, &self.weight_window);
        confidence_map(&self.fft, &patch, &self.tracking_filter)
    }

    fn check_frame(&self, frame: &impl AsGray) -> Result<()> {
        let actual = frame.dimensions();
        if actual != self.frame_size {
            return Err(StcError::FrameSizeMismatch {
                expected: self.frame_size,
                actual,
            });
        }
        Ok(())
    }

    pub fn params(&self) -> &StcParams {
        &self.params
    }

    pub fn center(&self) -> IVec2 {
        self.center
    }

    pub fn target_size(&self) -> Vec2 {
        self.target_size
    }

    pub fn context_size(&self) -> IVec2 {
        self.context_size
    }

    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn frame_counter(&self) -> usize {
        self.frame_counter
    }

    pub fn confidence_history(&self) -> &[f32] {
        self.confidence_history.values()
    }

    pub fn confidence_prior(&self) -> &GrayImage {
        &self.confidence_prior
    }

    pub fn weight_window(&self) -> &GrayImage {
        &self.weight_window
    }

    pub fn tracking_filter(&self) -> &ComplexMatrix {
        &self.tracking_filter
    }
}

fn within_reach(c: i32, extent: i32) -> bool {
    c.checked_sub(extent).is_some() && c.checked_add(extent).is_some()
}

/// A tracking session that may not have been initialized yet.
#[derive(Debug, Clone, Default)]
pub struct StcTracker {
    params: StcParams,
    state: Option<TrackerState>,
}

impl StcTracker {
    pub fn new(params: StcParams) -> Self {
        Self {
            params,
            state: None,
        }
    }

    /// Start tracking `initial_box` in `frame`. On error any previous session
    /// is left as it was.
    pub fn initialize(&mut self, initial_box: BoundingBox, frame: &impl AsGray) -> Result<()> {
        let state = TrackerState::initialize(initial_box, frame, self.params.clone())?;
        self.state = Some(state);
        Ok(())
    }

    pub fn update(&mut self, frame: &impl AsGray) -> Result<BoundingBox> {
        self.state
            .as_mut()
            .ok_or(StcError::NotInitialized)?
            .update(frame)
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&TrackerState> {
        self.state.as_ref()
    }

    /// Drop the current session.
    pub fn reset(&mut self) {
        self.state = None;
    }
}
