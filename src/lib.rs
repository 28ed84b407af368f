//! seqmatrix - sequential disk throughput matrix benchmark
//!
//! Streams deterministic payloads through buffered file I/O across a fixed
//! matrix of file sizes and buffer sizes, timing each pass with a monotonic
//! clock and reporting per-configuration latency as a CSV table.

use std::fmt;

// Public re-exports
pub mod bench;
pub mod config;
pub mod io;
pub mod models;
pub mod report;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum SeqMatrixError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation error
    ConfigError(String),
    /// Benchmark execution error
    BenchmarkError(String),
    /// CSV report serialization error
    ReportError(String),
    /// Results history persistence error
    PersistenceError(String),
}

impl fmt::Display for SeqMatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqMatrixError::IoError(err) => write!(f, "I/O error: {}", err),
            SeqMatrixError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            SeqMatrixError::BenchmarkError(msg) => write!(f, "Benchmark error: {}", msg),
            SeqMatrixError::ReportError(msg) => write!(f, "Report error: {}", msg),
            SeqMatrixError::PersistenceError(msg) => {
                write!(f, "Results persistence error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SeqMatrixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeqMatrixError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SeqMatrixError {
    fn from(err: std::io::Error) -> Self {
        SeqMatrixError::IoError(err)
    }
}

impl From<serde_json::Error> for SeqMatrixError {
    fn from(err: serde_json::Error) -> Self {
        SeqMatrixError::PersistenceError(format!("JSON serialization error: {}", err))
    }
}

/// Result type alias for seqmatrix operations
pub type Result<T> = std::result::Result<T, SeqMatrixError>;

// Common constants
pub const APP_NAME: &str = "seqmatrix";
pub const REPORT_FILE: &str = "disk_benchmark_results.csv";
pub const RESULTS_FILE: &str = "results.json";
pub const TEST_FILE_PREFIX: &str = "test_file_";
pub const MAX_RESULTS_HISTORY: usize = 100;
