//! File-level parsing for datalogger CSV files
//!
//! Reads one log file, validates its header against the fixed key prefix
//! and returns the file's schema together with its parsed rows.

use std::path::Path;
use tracing::debug;

use super::header::FileSchema;
use super::record_parser::parse_log_record;
use crate::app::models::RawRecord;
use crate::{Error, Result};

/// Result of parsing one log file
#[derive(Debug, Clone)]
pub struct ParsedFile {
    /// Field schema from the header row
    pub schema: FileSchema,

    /// Parsed data rows in file order
    pub records: Vec<RawRecord>,
}

impl ParsedFile {
    /// Number of data rows in the file
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

/// Parse a single datalogger CSV file.
///
/// Any structural problem (unreadable file, bad header, malformed row,
/// ragged column count) is fatal: the caller aborts the whole load rather
/// than publishing a partially merged store.
pub fn parse_log_file(path: &Path) -> Result<ParsedFile> {
    let file_name = path.display().to_string();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| Error::invalid_format(&file_name, format!("failed to open: {}", e)))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::invalid_format(&file_name, format!("failed to read header: {}", e)))?;

    let schema = FileSchema::parse(headers, &file_name)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result
            .map_err(|e| Error::invalid_format(&file_name, format!("malformed row: {}", e)))?;
        records.push(parse_log_record(&record, &schema, &file_name)?);
    }

    debug!(
        "Parsed {} records with {} fields from {}",
        records.len(),
        schema.field_count(),
        file_name
    );

    Ok(ParsedFile { schema, records })
}
