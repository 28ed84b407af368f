//! Sequential benchmark operations
//!
//! One full buffered write pass and one full buffered read pass over a test
//! file, each timed with a monotonic clock. A measurement either succeeds
//! with its elapsed duration or fails with an error; a failed measurement
//! never produces a latency value.

use crate::io::disk::{fill_pattern, open_payload_reader, open_payload_writer};
use crate::{Result, SeqMatrixError};
use std::io::{Read, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// Time a full sequential write pass
///
/// Opens `path` for writing (truncating), writes
/// `floor(file_size / buffer_size)` buffers of `buffer_size` bytes and
/// returns the elapsed wall-clock time of the write loop. The buffered
/// tail is flushed outside the timed region, matching a close after the
/// clock stops.
pub fn benchmark_write(file_size: u64, buffer_size: u64, path: &Path) -> Result<Duration> {
    let buffer = fill_pattern(buffer_size as usize);
    let mut writer = open_payload_writer(path, buffer_size as usize).map_err(|e| {
        SeqMatrixError::BenchmarkError(format!(
            "Failed to open {} for writing: {}",
            path.display(),
            e
        ))
    })?;

    let start = Instant::now();
    for _ in 0..file_size / buffer_size {
        writer.write_all(&buffer)?;
    }
    let elapsed = start.elapsed();

    writer.flush()?;
    Ok(elapsed)
}

/// Time a full sequential read pass
///
/// Opens `path` for reading and reads `buffer_size`-byte chunks until
/// end-of-file, discarding contents. Returns the elapsed wall-clock time of
/// the read loop.
pub fn benchmark_read(buffer_size: u64, path: &Path) -> Result<Duration> {
    let mut buffer = vec![0u8; buffer_size as usize];
    let mut reader = open_payload_reader(path, buffer_size as usize).map_err(|e| {
        SeqMatrixError::BenchmarkError(format!(
            "Failed to open {} for reading: {}",
            path.display(),
            e
        ))
    })?;

    let start = Instant::now();
    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
    }
    Ok(start.elapsed())
}
