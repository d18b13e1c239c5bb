//! STC Core - Foundation types for the spatio-temporal context tracker
//!
//! This crate provides the types shared between the tracker and its harness:
//! - Error taxonomy and the crate-wide `Result` alias
//! - Caller-owned 8-bit frame buffers and pixel formats
//! - Geometric primitives (integer boxes, float rectangles)

pub mod error;
pub mod frame;
pub mod geometry;

pub use error::{Result, StcError};
pub use frame::{FrameBuffer, PixelFormat};
pub use geometry::{BoundingBox, IVec2, Rect, Vec2};
