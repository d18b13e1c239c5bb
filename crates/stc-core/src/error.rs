//! Error types for the STC tracker.

use thiserror::Error;

/// Main error type for tracker operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StcError {
    #[error("Invalid selection: {width}x{height} box cannot be tracked")]
    InvalidSelection { width: i32, height: i32 },

    #[error("Tracker used before initialization")]
    NotInitialized,

    #[error("Frame size mismatch: expected {expected:?}, got {actual:?}")]
    FrameSizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("Degenerate confidence {value} in history slot {slot}")]
    DegenerateConfidence { slot: usize, value: f32 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for tracker operations.
pub type Result<T> = std::result::Result<T, StcError>;
