//! Individual row parsing for datalogger CSV files
//!
//! Rows carry a reference id, a day-first date, a time, and one cell per
//! data field. The date and time columns are combined into a single
//! timestamp; data cells are auto-detected as numeric or text.

use chrono::NaiveDateTime;
use csv::StringRecord;

use super::header::FileSchema;
use crate::app::models::{RawRecord, Value};
use crate::constants::{HEADER_PREFIX, TIMESTAMP_FORMAT};
use crate::{Error, Result};

/// Combine the Date and Time columns into a timestamp.
///
/// The date is day-first (`DD-MM-YYYY`), the time is `HH:MM:SS`. A value
/// that does not match is a fatal format error for the load.
pub fn parse_timestamp(date_field: &str, time_field: &str) -> Result<NaiveDateTime> {
    let combined = format!("{} {}", date_field.trim(), time_field.trim());

    NaiveDateTime::parse_from_str(&combined, TIMESTAMP_FORMAT).map_err(|e| {
        Error::datetime_parsing(
            format!(
                "invalid timestamp '{}' (expected '{}')",
                combined, TIMESTAMP_FORMAT
            ),
            e,
        )
    })
}

/// Parse one data row against the file's schema
pub fn parse_log_record(
    record: &StringRecord,
    schema: &FileSchema,
    file: &str,
) -> Result<RawRecord> {
    if record.len() != schema.column_count() {
        return Err(Error::invalid_format(
            file,
            format!(
                "row has {} columns, expected {}",
                record.len(),
                schema.column_count()
            ),
        ));
    }

    let reference = record
        .get(0)
        .unwrap_or_default()
        .trim()
        .to_string();

    let timestamp = parse_timestamp(
        record.get(1).unwrap_or_default(),
        record.get(2).unwrap_or_default(),
    )?;

    let values = record
        .iter()
        .skip(HEADER_PREFIX.len())
        .map(Value::parse)
        .collect();

    Ok(RawRecord {
        reference,
        timestamp,
        values,
    })
}
