//! Tests for individual row parsing

use super::super::header::FileSchema;
use super::super::record_parser::{parse_log_record, parse_timestamp};
use crate::app::models::Value;
use csv::StringRecord;

fn schema(fields: &[&str]) -> FileSchema {
    let mut columns = vec!["Reference", "Date", "Time"];
    columns.extend_from_slice(fields);
    FileSchema::parse(&StringRecord::from(columns), "test.csv").unwrap()
}

#[test]
fn test_timestamp_day_first() {
    let ts = parse_timestamp("02-06-2015", "10:30:00").unwrap();
    assert_eq!(ts.to_string(), "2015-06-02 10:30:00");
}

#[test]
fn test_timestamp_whitespace_tolerated() {
    let ts = parse_timestamp(" 02-06-2015 ", " 10:30:00").unwrap();
    assert_eq!(ts.to_string(), "2015-06-02 10:30:00");
}

#[test]
fn test_timestamp_month_first_rejected() {
    // 25 is not a valid month, so a month-first layout cannot sneak through
    assert!(parse_timestamp("06-25-2015", "10:30:00").is_err());
}

#[test]
fn test_timestamp_garbage_rejected() {
    assert!(parse_timestamp("yesterday", "noon").is_err());
}

#[test]
fn test_record_cells_auto_detected() {
    let schema = schema(&["Temperature", "Direction"]);
    let row = StringRecord::from(vec!["D001", "01-06-2015", "10:00:00", "21.5", "NW"]);

    let record = parse_log_record(&row, &schema, "test.csv").unwrap();

    assert_eq!(record.reference, "D001");
    assert_eq!(record.values[0], Value::Number(21.5));
    assert_eq!(record.values[1], Value::Text("NW".to_string()));
}

#[test]
fn test_record_column_count_enforced() {
    let schema = schema(&["Temperature", "Direction"]);
    let row = StringRecord::from(vec!["D001", "01-06-2015", "10:00:00", "21.5"]);

    assert!(parse_log_record(&row, &schema, "test.csv").is_err());
}

#[test]
fn test_record_bad_timestamp_is_fatal() {
    let schema = schema(&["Temperature"]);
    let row = StringRecord::from(vec!["D001", "2015-06-01", "10:00:00", "21.5"]);

    let result = parse_log_record(&row, &schema, "test.csv");
    assert!(matches!(
        result,
        Err(crate::Error::DateTimeParsing { .. })
    ));
}
