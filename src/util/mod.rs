//! Utility functions module
//!
//! Contains helpers for formatting durations for display.

pub mod format;

// Re-export commonly used functions
pub use format::{minutes_to_duration, seconds_to_duration};
