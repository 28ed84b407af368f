//! Results persistence module
//!
//! Handles saving, loading, and rotation of benchmark run history.

use crate::models::BenchmarkResult;
use crate::{Result, SeqMatrixError, APP_NAME, MAX_RESULTS_HISTORY, RESULTS_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Results storage manager
#[derive(Debug)]
pub struct ResultsStorage {
    results_path: PathBuf,
}

/// Results file structure for JSON persistence
#[derive(Debug, Serialize, Deserialize)]
struct ResultsFile {
    version: u32,
    results: Vec<BenchmarkResult>,
}

impl Default for ResultsFile {
    fn default() -> Self {
        Self {
            version: 1,
            results: Vec::new(),
        }
    }
}

impl ResultsStorage {
    /// Create a results storage manager at the standard location
    pub fn new() -> Result<Self> {
        let results_path = Self::results_file_path()?;
        Ok(Self { results_path })
    }

    /// Create a results storage manager backed by a specific file
    pub fn with_path(results_path: PathBuf) -> Self {
        Self { results_path }
    }

    /// Get the standard results file path
    /// Uses $DATA_HOME/seqmatrix/results.json or the platform equivalent
    pub fn results_file_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            SeqMatrixError::PersistenceError("Unable to determine data directory".to_string())
        })?;

        Ok(data_dir.join(APP_NAME).join(RESULTS_FILE))
    }

    /// Load all results from the results file
    pub fn load_results(&self) -> Result<Vec<BenchmarkResult>> {
        if !self.results_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.results_path).map_err(|e| {
            SeqMatrixError::PersistenceError(format!(
                "Failed to read results file {}: {}",
                self.results_path.display(),
                e
            ))
        })?;

        let results_file: ResultsFile = serde_json::from_str(&content).map_err(|e| {
            SeqMatrixError::PersistenceError(format!(
                "Failed to parse results file {}: {}",
                self.results_path.display(),
                e
            ))
        })?;

        Ok(results_file.results)
    }

    /// Append a run's results to the history file
    /// Automatically rotates old entries beyond MAX_RESULTS_HISTORY
    pub fn append_results(&self, new_results: &[BenchmarkResult]) -> Result<()> {
        let mut results = self.load_results()?;
        results.extend_from_slice(new_results);

        if results.len() > MAX_RESULTS_HISTORY {
            let skip_count = results.len() - MAX_RESULTS_HISTORY;
            results = results.into_iter().skip(skip_count).collect();
        }

        self.save_results(results)
    }

    /// Get the number of stored results
    pub fn count_results(&self) -> Result<usize> {
        let results = self.load_results()?;
        Ok(results.len())
    }

    fn save_results(&self, results: Vec<BenchmarkResult>) -> Result<()> {
        if let Some(parent) = self.results_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SeqMatrixError::PersistenceError(format!(
                    "Failed to create results directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let results_file = ResultsFile {
            version: 1,
            results,
        };

        let content = serde_json::to_string_pretty(&results_file).map_err(|e| {
            SeqMatrixError::PersistenceError(format!("Failed to serialize results: {}", e))
        })?;

        fs::write(&self.results_path, content).map_err(|e| {
            SeqMatrixError::PersistenceError(format!(
                "Failed to write results file {}: {}",
                self.results_path.display(),
                e
            ))
        })?;

        Ok(())
    }
}
