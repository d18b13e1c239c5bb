//! Scale estimation from a ring of recent confidence peaks.

use stc_core::{Result, StcError};

/// Confidence values at or below this are treated as degenerate.
pub const MIN_CONFIDENCE: f32 = 1e-12;

/// Floor modulo: the result always lies in `[0, n)`, also for negative `i`.
#[inline]
pub fn floor_mod(i: i64, n: usize) -> usize {
    i.rem_euclid(n as i64) as usize
}

/// Fixed-length ring of peak confidence magnitudes, one slot per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceHistory {
    values: Vec<f32>,
}

impl ConfidenceHistory {
    pub fn new(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Store `value` in the slot for frame number `frame`.
    pub fn record(&mut self, frame: usize, value: f32) {
        let n = self.values.len();
        self.values[frame % n] = value;
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

/// Mean of the square-rooted ratios between adjacent history slots, walking
/// backwards from `newest`:
/// `sqrt(h[newest - k] / h[newest - k - 1])` for `k = 0..N`, indices wrapped
/// with [`floor_mod`].
///
/// Fails with [`StcError::DegenerateConfidence`] if any slot is non-finite or
/// not above [`MIN_CONFIDENCE`].
pub fn mean_ratio(history: &[f32], newest: usize) -> Result<f32> {
    let n = history.len();
    if n == 0 {
        return Err(StcError::InvalidParameter("empty confidence history".into()));
    }
    if let Some((slot, &value)) = history
        .iter()
        .enumerate()
        .find(|&(_, &v)| !v.is_finite() || v <= MIN_CONFIDENCE)
    {
        return Err(StcError::DegenerateConfidence { slot, value });
    }

    let newest = newest as i64;
    let sum: f32 = (0..n as i64)
        .map(|k| {
            let current = history[floor_mod(newest - k, n)];
            let previous = history[floor_mod(newest - k - 1, n)];
            (current / previous).sqrt()
        })
        .sum();
    Ok(sum / n as f32)
}

/// Exponentially smoothed scale update: `(1 - lambda) · scale + lambda · mean_ratio`.
pub fn estimate_scale(history: &[f32], newest: usize, scale: f32, lambda: f32) -> Result<f32> {
    let ratio = mean_ratio(history, newest)?;
    Ok((1.0 - lambda) * scale + lambda * ratio)
}
