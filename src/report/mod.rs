//! CSV report writer
//!
//! Serializes the collected results to the report file, one row per
//! fully-measured configuration in collection order. The file is rewritten
//! from scratch on each run; there is no atomic rename or partial-write
//! recovery.

use crate::models::ResultSet;
use crate::{Result, SeqMatrixError};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Exact header line of the CSV report
pub const CSV_HEADER: &str =
    "File Size (MB),Buffer Size (KB),Write Latency (ms),Read Latency (ms)";

/// Write the CSV report for a completed run
pub fn write_csv(results: &ResultSet, path: &Path) -> Result<()> {
    write_rows(results, path).map_err(|e| {
        SeqMatrixError::ReportError(format!(
            "Failed to write report {}: {}",
            path.display(),
            e
        ))
    })
}

fn write_rows(results: &ResultSet, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    writeln!(writer, "{}", CSV_HEADER)?;
    for result in results {
        writeln!(
            writer,
            "{},{},{},{}",
            result.file_size_mb(),
            result.buffer_size_kb(),
            result.write_latency_ms(),
            result.read_latency_ms()
        )?;
    }

    writer.flush()
}
