//! Configuration module
//!
//! Defines the benchmark matrix and its validation. The matrix is fixed at
//! build time; the program consumes no command-line arguments, environment
//! variables, or configuration files.

use crate::{Result, SeqMatrixError, REPORT_FILE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod persistence;

/// Default file sizes: 10 MiB, 50 MiB, 100 MiB
pub const DEFAULT_FILE_SIZES: [u64; 3] =
    [10 * 1024 * 1024, 50 * 1024 * 1024, 100 * 1024 * 1024];

/// Default buffer sizes: 1 KiB, 4 KiB, 16 KiB
pub const DEFAULT_BUFFER_SIZES: [u64; 3] = [1024, 4 * 1024, 16 * 1024];

/// Benchmark matrix configuration
///
/// File sizes form the outer iteration loop, buffer sizes the inner one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixConfig {
    /// Target file sizes in bytes, iterated in order as the outer loop
    pub file_sizes: Vec<u64>,
    /// Buffer sizes in bytes, iterated in order as the inner loop
    pub buffer_sizes: Vec<u64>,
    /// Directory test files are created in
    pub target_dir: PathBuf,
    /// Path of the CSV report, overwritten on each run
    pub report_path: PathBuf,
    /// Whether to keep test files after each configuration
    pub keep_test_files: bool,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            file_sizes: DEFAULT_FILE_SIZES.to_vec(),
            buffer_sizes: DEFAULT_BUFFER_SIZES.to_vec(),
            target_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            report_path: PathBuf::from(REPORT_FILE),
            keep_test_files: false,
        }
    }
}

impl MatrixConfig {
    /// Create a new matrix configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target directory for test files
    pub fn with_target_dir(mut self, dir: PathBuf) -> Self {
        self.target_dir = dir;
        self
    }

    /// Set the file size list
    pub fn with_file_sizes(mut self, sizes: Vec<u64>) -> Self {
        self.file_sizes = sizes;
        self
    }

    /// Set the buffer size list
    pub fn with_buffer_sizes(mut self, sizes: Vec<u64>) -> Self {
        self.buffer_sizes = sizes;
        self
    }

    /// Set the CSV report path
    pub fn with_report_path(mut self, path: PathBuf) -> Self {
        self.report_path = path;
        self
    }

    /// Set whether to keep test files after each configuration
    pub fn with_keep_test_files(mut self, keep: bool) -> Self {
        self.keep_test_files = keep;
        self
    }

    /// Number of (file size, buffer size) pairs in the matrix
    pub fn pair_count(&self) -> usize {
        self.file_sizes.len() * self.buffer_sizes.len()
    }

    /// Iterate the matrix in driver order: file size outer, buffer size inner
    pub fn pairs(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.file_sizes.iter().flat_map(move |&file_size| {
            self.buffer_sizes
                .iter()
                .map(move |&buffer_size| (file_size, buffer_size))
        })
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.exists() {
            return Err(SeqMatrixError::ConfigError(format!(
                "Target directory does not exist: {}",
                self.target_dir.display()
            )));
        }

        if !self.target_dir.is_dir() {
            return Err(SeqMatrixError::ConfigError(format!(
                "Target path is not a directory: {}",
                self.target_dir.display()
            )));
        }

        if self.file_sizes.is_empty() {
            return Err(SeqMatrixError::ConfigError(
                "File size list must not be empty".to_string(),
            ));
        }

        if self.buffer_sizes.is_empty() {
            return Err(SeqMatrixError::ConfigError(
                "Buffer size list must not be empty".to_string(),
            ));
        }

        if self.file_sizes.iter().any(|&size| size == 0) {
            return Err(SeqMatrixError::ConfigError(
                "File sizes must be greater than 0".to_string(),
            ));
        }

        if self.buffer_sizes.iter().any(|&size| size == 0) {
            return Err(SeqMatrixError::ConfigError(
                "Buffer sizes must be greater than 0".to_string(),
            ));
        }

        // A buffer larger than the smallest file would floor to zero writes
        let min_file = self.file_sizes.iter().copied().min().unwrap_or(0);
        let max_buffer = self.buffer_sizes.iter().copied().max().unwrap_or(0);
        if max_buffer > min_file {
            return Err(SeqMatrixError::ConfigError(format!(
                "Largest buffer size ({} bytes) exceeds smallest file size ({} bytes)",
                max_buffer, min_file
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_matrix() {
        let config = MatrixConfig::default();
        assert_eq!(config.file_sizes, DEFAULT_FILE_SIZES.to_vec());
        assert_eq!(config.buffer_sizes, DEFAULT_BUFFER_SIZES.to_vec());
        assert_eq!(config.pair_count(), 9);
        assert!(!config.keep_test_files);
    }

    #[test]
    fn test_pairs_iteration_order() {
        let config = MatrixConfig::default()
            .with_file_sizes(vec![10, 20])
            .with_buffer_sizes(vec![1, 2]);

        let pairs: Vec<(u64, u64)> = config.pairs().collect();
        assert_eq!(pairs, vec![(10, 1), (10, 2), (20, 1), (20, 2)]);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let temp_dir = tempdir().unwrap();
        let config = MatrixConfig::default().with_target_dir(temp_dir.path().to_path_buf());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_dir() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("nope");
        let config = MatrixConfig::default().with_target_dir(missing);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_lists() {
        let temp_dir = tempdir().unwrap();
        let config = MatrixConfig::default()
            .with_target_dir(temp_dir.path().to_path_buf())
            .with_file_sizes(vec![]);
        assert!(config.validate().is_err());

        let config = MatrixConfig::default()
            .with_target_dir(temp_dir.path().to_path_buf())
            .with_buffer_sizes(vec![]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        let temp_dir = tempdir().unwrap();
        let config = MatrixConfig::default()
            .with_target_dir(temp_dir.path().to_path_buf())
            .with_file_sizes(vec![1024, 0]);
        assert!(config.validate().is_err());

        let config = MatrixConfig::default()
            .with_target_dir(temp_dir.path().to_path_buf())
            .with_buffer_sizes(vec![0]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_buffer() {
        let temp_dir = tempdir().unwrap();
        let config = MatrixConfig::default()
            .with_target_dir(temp_dir.path().to_path_buf())
            .with_file_sizes(vec![4096])
            .with_buffer_sizes(vec![8192]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_serialization() {
        let config = MatrixConfig::default();
        let json = serde_json::to_string(&config).expect("Failed to serialize");
        let deserialized: MatrixConfig =
            serde_json::from_str(&json).expect("Failed to deserialize");

        assert_eq!(config.file_sizes, deserialized.file_sizes);
        assert_eq!(config.buffer_sizes, deserialized.buffer_sizes);
        assert_eq!(config.keep_test_files, deserialized.keep_test_files);
    }
}
