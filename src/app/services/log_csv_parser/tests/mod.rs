//! Test utilities for datalogger CSV parser testing
//!
//! Provides shared fixture content and temp-file helpers used across the
//! parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod header_tests;
mod record_tests;

/// A small, well-formed log file covering numeric and text cells
pub fn create_test_log_csv() -> String {
    "Reference, Date, Time, Temperature, Humidity, Wind Pulses, Direction\n\
     D001,01-06-2015,10:00:00,21.5,0.61,0,N\n\
     D001,01-06-2015,10:00:30,21.6,0.62,10,NE\n\
     D001,01-06-2015,10:01:00,21.4,0.60,15,E\n"
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
