//! Tracker parameters.

use serde::{Deserialize, Serialize};
use stc_core::{Result, StcError};

/// Parameters for the spatio-temporal context tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StcParams {
    /// Extra area around the target; the context window is `(1 + padding)`
    /// times the target size on each axis.
    pub padding: f32,
    /// Steepness of the confidence prior.
    pub alpha: f32,
    /// Smoothing weight of a new scale estimate.
    pub lambda: f32,
    /// Frames per scale re-estimation, also the confidence ring length.
    pub history_len: usize,
    /// Regularizer added to the patch spectrum when learning the filter.
    pub eps: f32,
    /// Filter learning rate for `blend_filter`. Not applied by `update`.
    pub learning_rate: f32,
}

impl Default for StcParams {
    fn default() -> Self {
        Self {
            padding: 1.0,
            alpha: 2.25,
            lambda: 0.25,
            history_len: 5,
            eps: 1e-5,
            learning_rate: 0.075,
        }
    }
}

impl StcParams {
    pub fn validate(&self) -> Result<()> {
        if self.padding.is_nan() || self.padding < 0.0 {
            return Err(StcError::InvalidParameter(format!(
                "padding must be >= 0, got {}",
                self.padding
            )));
        }
        if self.alpha.is_nan() || self.alpha <= 0.0 {
            return Err(StcError::InvalidParameter(format!(
                "alpha must be > 0, got {}",
                self.alpha
            )));
        }
        if !(0.0..=1.0).contains(&self.lambda) {
            return Err(StcError::InvalidParameter(format!(
                "lambda must be in [0, 1], got {}",
                self.lambda
            )));
        }
        if self.history_len == 0 {
            return Err(StcError::InvalidParameter(
                "history_len must be at least 1".into(),
            ));
        }
        if self.eps.is_nan() || self.eps < 0.0 {
            return Err(StcError::InvalidParameter(format!(
                "eps must be >= 0, got {}",
                self.eps
            )));
        }
        if !(0.0..=1.0).contains(&self.learning_rate) {
            return Err(StcError::InvalidParameter(format!(
                "learning_rate must be in [0, 1], got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}
