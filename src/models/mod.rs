//! Data models module
//!
//! Contains benchmark result data models and the ordered result collection.

pub mod result;

// Re-export commonly used types
pub use result::{BenchmarkResult, ResultSet};
