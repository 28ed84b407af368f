//! Utility functions module
//!
//! Contains helper functions for units formatting and throughput
//! calculation.

pub mod units;

// Re-export commonly used functions
pub use units::{calculate_throughput_mbps, format_bytes, format_duration, format_latency};
