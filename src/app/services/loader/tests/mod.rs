//! Test utilities for directory loader testing
//!
//! Provides temp-directory fixtures shared by the discovery and loader
//! test modules.

use std::fs;
use std::path::Path;
use tempfile::TempDir;


/// Write one log file into a fixture directory
pub fn write_log_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

/// Directory with two log files carrying the wind instrument fields.
///
/// File A holds the pulse counts 0/10/25 at 30-second intervals used by
/// the conversion tests; file B extends the same day with two later rows.
pub fn wind_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_log_file(
        dir.path(),
        "DL0601.csv",
        "Reference, Date, Time, Humidity, Wind Pulses, Direction\n\
         D001,01-06-2015,10:00:00,0.50,0,N\n\
         D001,01-06-2015,10:00:30,0.55,10,NE\n\
         D001,01-06-2015,10:01:00,0.60,25,E\n",
    );
    write_log_file(
        dir.path(),
        "DL0602.csv",
        "Reference, Date, Time, Humidity, Wind Pulses, Direction\n\
         D001,01-06-2015,10:01:30,0.65,12,SE\n\
         D001,01-06-2015,10:02:00,0.70,6,S\n",
    );
    dir
}
