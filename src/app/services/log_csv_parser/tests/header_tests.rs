//! Tests for log file header validation

use super::super::header::FileSchema;
use csv::StringRecord;

fn record(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

#[test]
fn test_header_with_fields() {
    let headers = record(&["Reference", "Date", "Time", "Temperature", "Humidity"]);
    let schema = FileSchema::parse(&headers, "test.csv").unwrap();

    assert_eq!(schema.field_names, vec!["Temperature", "Humidity"]);
    assert_eq!(schema.field_count(), 2);
    assert_eq!(schema.column_count(), 5);
}

#[test]
fn test_header_whitespace_is_trimmed() {
    let headers = record(&[" Reference", " Date ", "Time ", "  Wind Pulses "]);
    let schema = FileSchema::parse(&headers, "test.csv").unwrap();

    assert_eq!(schema.field_names, vec!["Wind Pulses"]);
}

#[test]
fn test_header_wrong_prefix_rejected() {
    let headers = record(&["Ref", "Date", "Time", "Temperature"]);
    let result = FileSchema::parse(&headers, "test.csv");

    assert!(matches!(
        result,
        Err(crate::Error::InvalidFormat { .. })
    ));
}

#[test]
fn test_header_prefix_order_matters() {
    let headers = record(&["Date", "Reference", "Time", "Temperature"]);
    assert!(FileSchema::parse(&headers, "test.csv").is_err());
}

#[test]
fn test_header_too_short_rejected() {
    let headers = record(&["Reference", "Date"]);
    assert!(FileSchema::parse(&headers, "test.csv").is_err());
}

#[test]
fn test_header_prefix_only_is_valid() {
    // A file with no data fields is structurally valid, just empty
    let headers = record(&["Reference", "Date", "Time"]);
    let schema = FileSchema::parse(&headers, "test.csv").unwrap();
    assert_eq!(schema.field_count(), 0);
}
