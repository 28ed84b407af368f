use crate::TEST_FILE_PREFIX;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Build the transient test file path for one matrix configuration
pub fn test_file_name(dir: &Path, file_size: u64, buffer_size: u64) -> PathBuf {
    dir.join(format!(
        "{}{}_{}.bin",
        TEST_FILE_PREFIX, file_size, buffer_size
    ))
}

/// Deterministic repeating byte pattern used to fill every payload buffer
pub fn fill_pattern(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Open a file for a buffered write pass, creating or truncating it
pub fn open_payload_writer(path: &Path, buffer_size: usize) -> io::Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    Ok(BufWriter::with_capacity(buffer_size, file))
}

/// Open a file for a buffered read pass
pub fn open_payload_reader(path: &Path, buffer_size: usize) -> io::Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::with_capacity(buffer_size, file))
}

/// Create the payload file for one configuration
///
/// Writes `floor(file_size / buffer_size)` buffers of `buffer_size` bytes;
/// a non-dividing remainder is dropped, so the file on disk may be smaller
/// than `file_size`.
pub fn write_payload(path: &Path, file_size: u64, buffer_size: u64) -> io::Result<()> {
    let buffer = fill_pattern(buffer_size as usize);
    let mut writer = open_payload_writer(path, buffer_size as usize)?;

    for _ in 0..file_size / buffer_size {
        writer.write_all(&buffer)?;
    }

    writer.flush()
}

/// Transient test file with automatic cleanup
pub struct TestFile {
    path: PathBuf,
    cleanup_on_drop: bool,
}

impl TestFile {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            cleanup_on_drop: true,
        }
    }

    /// Disable automatic cleanup (for debugging)
    pub fn keep_on_drop(&mut self) {
        self.cleanup_on_drop = false;
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TestFile {
    fn drop(&mut self) {
        if self.cleanup_on_drop {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_test_file_name_format() {
        let path = test_file_name(Path::new("/tmp"), 10_485_760, 4096);
        assert_eq!(
            path,
            PathBuf::from("/tmp/test_file_10485760_4096.bin")
        );
    }

    #[test]
    fn test_fill_pattern_repeats() {
        let pattern = fill_pattern(512);
        assert_eq!(pattern.len(), 512);
        for (i, &byte) in pattern.iter().enumerate() {
            assert_eq!(byte, (i % 256) as u8);
        }
    }

    #[test]
    fn test_write_payload_exact_size() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("payload.bin");

        write_payload(&path, 64 * 1024, 4096).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 64 * 1024);
    }

    #[test]
    fn test_write_payload_drops_remainder() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("payload.bin");

        // floor(10000 / 4096) = 2 buffers of 4096 bytes
        write_payload(&path, 10_000, 4096).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 8192);
    }

    #[test]
    fn test_write_payload_truncates_existing() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("payload.bin");

        write_payload(&path, 16 * 1024, 1024).unwrap();
        write_payload(&path, 4096, 1024).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 4096);
    }

    #[test]
    fn test_write_payload_missing_dir_fails() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing").join("payload.bin");
        assert!(write_payload(&path, 4096, 1024).is_err());
    }

    #[test]
    fn test_test_file_cleanup_on_drop() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("transient.bin");
        std::fs::write(&path, b"data").unwrap();

        let test_file = TestFile::new(path.clone());
        assert!(test_file.path().exists());
        drop(test_file);
        assert!(!path.exists());
    }

    #[test]
    fn test_test_file_keep_on_drop() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("kept.bin");
        std::fs::write(&path, b"data").unwrap();

        let mut test_file = TestFile::new(path.clone());
        test_file.keep_on_drop();
        drop(test_file);
        assert!(path.exists());
    }
}
