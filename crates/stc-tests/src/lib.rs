//! Integration test crate for the STC tracker.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It drives `stc-tracking` with `stc-core` frame buffers the way a capture
//! harness would.

#[cfg(test)]
mod scenarios;

#[cfg(test)]
mod frames;
