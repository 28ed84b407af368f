//! Benchmark result data models
//!
//! Contains the per-configuration measurement record and the append-only
//! collection the driver fills in iteration order.

use crate::util::units::{calculate_throughput_mbps, format_bytes, format_latency};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Measurement record for one (file size, buffer size) configuration
///
/// Created once per configuration that completes both benchmark passes,
/// immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Timestamp when the configuration was measured
    pub timestamp: DateTime<Utc>,
    /// Target file size in bytes
    pub file_size: u64,
    /// Buffer size in bytes used for each chunk
    pub buffer_size: u64,
    /// Wall-clock duration of the full write pass
    #[serde(with = "duration_serde")]
    pub write_latency: Duration,
    /// Wall-clock duration of the full read pass
    #[serde(with = "duration_serde")]
    pub read_latency: Duration,
}

impl BenchmarkResult {
    /// Create a new result stamped with the current time
    pub fn new(
        file_size: u64,
        buffer_size: u64,
        write_latency: Duration,
        read_latency: Duration,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            file_size,
            buffer_size,
            write_latency,
            read_latency,
        }
    }

    /// File size in whole megabytes, as reported in the CSV
    pub fn file_size_mb(&self) -> u64 {
        self.file_size / (1024 * 1024)
    }

    /// Buffer size in whole kilobytes, as reported in the CSV
    pub fn buffer_size_kb(&self) -> u64 {
        self.buffer_size / 1024
    }

    /// Write latency in whole milliseconds
    pub fn write_latency_ms(&self) -> u128 {
        self.write_latency.as_millis()
    }

    /// Read latency in whole milliseconds
    pub fn read_latency_ms(&self) -> u128 {
        self.read_latency.as_millis()
    }

    /// Bytes actually streamed per pass: a non-dividing remainder is dropped
    pub fn payload_bytes(&self) -> u64 {
        self.buffer_size * (self.file_size / self.buffer_size)
    }

    /// Human-readable one-line summary of this configuration's measurements
    pub fn summary(&self) -> String {
        let payload = self.payload_bytes();
        format!(
            "{} file / {} buffers - write {} ({:.1} MB/s), read {} ({:.1} MB/s)",
            format_bytes(self.file_size),
            format_bytes(self.buffer_size),
            format_latency(self.write_latency),
            calculate_throughput_mbps(payload, self.write_latency),
            format_latency(self.read_latency),
            calculate_throughput_mbps(payload, self.read_latency),
        )
    }
}

/// Append-only ordered sequence of benchmark results
///
/// Populated exactly once per fully-successful configuration, in matrix
/// iteration order. No deduplication, no aggregation across runs.
#[derive(Debug, Default, Clone)]
pub struct ResultSet {
    results: Vec<BenchmarkResult>,
}

impl ResultSet {
    /// Create an empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result, preserving insertion order
    pub fn push(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    /// Number of collected results
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no configuration has completed yet
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate results in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, BenchmarkResult> {
        self.results.iter()
    }

    /// Borrow the results as a slice
    pub fn as_slice(&self) -> &[BenchmarkResult] {
        &self.results
    }

    /// Consume the set, yielding the underlying vector
    pub fn into_vec(self) -> Vec<BenchmarkResult> {
        self.results
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a BenchmarkResult;
    type IntoIter = std::slice::Iter<'a, BenchmarkResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

// Custom serde module for Duration serialization
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_nanos().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let nanos = u128::deserialize(deserializer)?;
        Ok(Duration::from_nanos(nanos as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> BenchmarkResult {
        BenchmarkResult::new(
            10 * 1024 * 1024,
            4096,
            Duration::from_millis(42),
            Duration::from_millis(17),
        )
    }

    #[test]
    fn test_result_creation() {
        let result = sample_result();
        assert_eq!(result.file_size, 10 * 1024 * 1024);
        assert_eq!(result.buffer_size, 4096);
        assert!(result.timestamp <= Utc::now());
    }

    #[test]
    fn test_unit_conversions() {
        let result = sample_result();
        assert_eq!(result.file_size_mb(), 10);
        assert_eq!(result.buffer_size_kb(), 4);
        assert_eq!(result.write_latency_ms(), 42);
        assert_eq!(result.read_latency_ms(), 17);
    }

    #[test]
    fn test_payload_bytes_drops_remainder() {
        let result = BenchmarkResult::new(
            10_000,
            4096,
            Duration::from_millis(1),
            Duration::from_millis(1),
        );
        // floor(10000 / 4096) = 2 buffers
        assert_eq!(result.payload_bytes(), 8192);

        // Evenly divisible case keeps the full size
        let even = sample_result();
        assert_eq!(even.payload_bytes(), 10 * 1024 * 1024);
    }

    #[test]
    fn test_summary_mentions_both_passes() {
        let summary = sample_result().summary();
        assert!(summary.contains("write"));
        assert!(summary.contains("read"));
        assert!(summary.contains("MB/s"));
    }

    #[test]
    fn test_result_set_preserves_order() {
        let mut set = ResultSet::new();
        assert!(set.is_empty());

        set.push(BenchmarkResult::new(
            1024,
            256,
            Duration::from_millis(1),
            Duration::from_millis(1),
        ));
        set.push(BenchmarkResult::new(
            2048,
            256,
            Duration::from_millis(1),
            Duration::from_millis(1),
        ));

        assert_eq!(set.len(), 2);
        let sizes: Vec<u64> = set.iter().map(|r| r.file_size).collect();
        assert_eq!(sizes, vec![1024, 2048]);

        let vec = set.into_vec();
        assert_eq!(vec.len(), 2);
    }

    #[test]
    fn test_serde_roundtrip() {
        let result = sample_result();
        let json = serde_json::to_string(&result).expect("Failed to serialize to JSON");
        let deserialized: BenchmarkResult =
            serde_json::from_str(&json).expect("Failed to deserialize from JSON");

        assert_eq!(result.file_size, deserialized.file_size);
        assert_eq!(result.buffer_size, deserialized.buffer_size);
        assert_eq!(result.write_latency, deserialized.write_latency);
        assert_eq!(result.read_latency, deserialized.read_latency);
        assert_eq!(result.timestamp, deserialized.timestamp);
    }
}
