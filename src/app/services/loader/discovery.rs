//! Log file discovery
//!
//! Finds datalogger CSV files directly inside a directory. The extension
//! match is case-insensitive and subdirectories are never entered.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::constants::LOG_FILE_EXTENSION;
use crate::{Error, Result};

/// All log files in a directory, sorted by path for a deterministic
/// parse order
pub fn log_filenames(folder: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(folder).map_err(|e| {
        Error::io(
            format!("failed to read directory '{}'", folder.display()),
            e,
        )
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            Error::io(
                format!("failed to read entry in '{}'", folder.display()),
                e,
            )
        })?;
        let path = entry.path();
        if path.is_file() && has_log_extension(&path) {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Precondition query used by callers before committing to a load.
///
/// True if the directory holds at least one log file; an unreadable
/// directory counts as having none.
pub fn directory_has_data_files(folder: &Path) -> bool {
    log_filenames(folder)
        .map(|paths| !paths.is_empty())
        .unwrap_or(false)
}

fn has_log_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.eq_ignore_ascii_case(LOG_FILE_EXTENSION))
        .unwrap_or(false)
}
