//! I/O operations module
//!
//! Buffered file access for the benchmark loop and the transient test file
//! lifecycle.

pub mod disk;

pub use disk::{
    fill_pattern, open_payload_reader, open_payload_writer, test_file_name, write_payload,
    TestFile,
};
