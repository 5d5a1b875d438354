//! Test utilities for special field conversion testing

use chrono::{NaiveDate, NaiveDateTime};

use crate::app::models::{FieldDescriptor, SpecialTag, TimeSeries, Value};
use crate::app::services::field_registry::FieldRegistry;
use crate::app::services::store::TimeSeriesStore;
use crate::config::Config;


/// Timestamp on the fixture day, offset in seconds from 10:00:00
pub fn at_offset(seconds: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2015, 6, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
        + chrono::Duration::seconds(seconds)
}

/// Numeric series sampled every 30 seconds
pub fn numeric_series(values: &[f64]) -> TimeSeries {
    TimeSeries::from_samples(
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (at_offset(30 * i as i64), Value::Number(*v)))
            .collect(),
    )
}

/// Text series sampled every 30 seconds
pub fn text_series(labels: &[&str]) -> TimeSeries {
    TimeSeries::from_samples(
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| (at_offset(30 * i as i64), Value::Text(label.to_string())))
            .collect(),
    )
}

/// Store holding a Wind Speed series and optionally a Direction series,
/// for capability queries
pub fn store_with_wind(speed_len: usize, direction_len: Option<usize>) -> TimeSeriesStore {
    let mut descriptors = vec![FieldDescriptor {
        raw_name: "Wind Pulses".to_string(),
        display_name: "Wind Speed".to_string(),
        is_numeric: true,
        tag: Some(SpecialTag::Windspeed),
    }];
    let mut series = vec![numeric_series(&vec![1.0; speed_len])];

    if let Some(len) = direction_len {
        descriptors.push(FieldDescriptor {
            raw_name: "Direction".to_string(),
            display_name: "Direction".to_string(),
            is_numeric: true,
            tag: Some(SpecialTag::WindDirection),
        });
        series.push(numeric_series(&vec![90.0; len]));
    }

    let registry = FieldRegistry::from_config(&Config::default());
    TimeSeriesStore::publish(descriptors, series, registry).unwrap()
}
