//! Log file header validation and field schema extraction
//!
//! The header row of every log file must begin with the fixed
//! `Reference, Date, Time` prefix; whatever follows names the data fields.

use crate::constants::HEADER_PREFIX;
use crate::{Error, Result};
use csv::StringRecord;

/// Field schema taken from one log file's header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSchema {
    /// Data field names in column order, whitespace-trimmed
    /// (the three key-prefix columns are not included)
    pub field_names: Vec<String>,
}

impl FileSchema {
    /// Validate a header row and extract the data field names.
    ///
    /// The first three columns must match the key prefix exactly after
    /// trimming; anything else is a fatal format error for the file.
    pub fn parse(headers: &StringRecord, file: &str) -> Result<Self> {
        let trimmed: Vec<&str> = headers.iter().map(str::trim).collect();

        if trimmed.len() < HEADER_PREFIX.len() {
            return Err(Error::invalid_format(
                file,
                format!(
                    "header has {} columns, expected at least {} ({})",
                    trimmed.len(),
                    HEADER_PREFIX.len(),
                    HEADER_PREFIX.join(", ")
                ),
            ));
        }

        for (expected, actual) in HEADER_PREFIX.iter().zip(trimmed.iter()) {
            if expected != actual {
                return Err(Error::invalid_format(
                    file,
                    format!(
                        "unexpected header column '{}', expected '{}'",
                        actual, expected
                    ),
                ));
            }
        }

        let field_names = trimmed[HEADER_PREFIX.len()..]
            .iter()
            .map(|s| s.to_string())
            .collect();

        Ok(FileSchema { field_names })
    }

    /// Number of data fields (key-prefix columns excluded)
    pub fn field_count(&self) -> usize {
        self.field_names.len()
    }

    /// Total number of columns a data row must have
    pub fn column_count(&self) -> usize {
        HEADER_PREFIX.len() + self.field_names.len()
    }
}
