//! Matrix driver
//!
//! Iterates the cross product of configured file sizes and buffer sizes,
//! orchestrating payload creation, the timed passes, result collection, and
//! test file cleanup. A failing step logs to standard error and skips the
//! rest of that configuration; the run itself always completes.

use crate::bench::sequential::{benchmark_read, benchmark_write};
use crate::config::MatrixConfig;
use crate::io::disk::{test_file_name, write_payload, TestFile};
use crate::models::{BenchmarkResult, ResultSet};
use crate::util::units::format_bytes;
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// Sequential benchmark driver for one matrix run
pub struct MatrixRunner {
    config: MatrixConfig,
}

impl MatrixRunner {
    /// Create a new runner for a validated configuration
    pub fn new(config: MatrixConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this runner executes
    pub fn config(&self) -> &MatrixConfig {
        &self.config
    }

    /// Execute every configuration in matrix order and collect results
    ///
    /// File sizes form the outer loop, buffer sizes the inner one. Failed
    /// configurations are skipped and contribute no result.
    pub fn run(&self) -> ResultSet {
        let pb = ProgressBar::new(self.config.pair_count() as u64);
        pb.set_style(
            ProgressStyle::with_template("{spinner} [{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let mut results = ResultSet::new();

        for (file_size, buffer_size) in self.config.pairs() {
            pb.set_message(format!(
                "{} file / {} buffers",
                format_bytes(file_size),
                format_bytes(buffer_size)
            ));

            if let Some(result) = self.run_configuration(file_size, buffer_size) {
                pb.println(result.summary());
                results.push(result);
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        results
    }

    /// Run one (file size, buffer size) configuration
    ///
    /// Returns `None` if any step fails; the test file is removed either way
    /// via the RAII guard.
    fn run_configuration(&self, file_size: u64, buffer_size: u64) -> Option<BenchmarkResult> {
        let mut test_file = TestFile::new(test_file_name(
            &self.config.target_dir,
            file_size,
            buffer_size,
        ));
        if self.config.keep_test_files {
            test_file.keep_on_drop();
        }

        if let Err(err) = write_payload(test_file.path(), file_size, buffer_size) {
            eprintln!(
                "Payload creation failed for {}: {}",
                test_file.path().display(),
                err
            );
            return None;
        }

        let write_latency = match benchmark_write(file_size, buffer_size, test_file.path()) {
            Ok(elapsed) => elapsed,
            Err(err) => {
                eprintln!(
                    "Write benchmark failed for {}: {}",
                    test_file.path().display(),
                    err
                );
                return None;
            }
        };

        let read_latency = match benchmark_read(buffer_size, test_file.path()) {
            Ok(elapsed) => elapsed,
            Err(err) => {
                eprintln!(
                    "Read benchmark failed for {}: {}",
                    test_file.path().display(),
                    err
                );
                return None;
            }
        };

        Some(BenchmarkResult::new(
            file_size,
            buffer_size,
            write_latency,
            read_latency,
        ))
    }
}
