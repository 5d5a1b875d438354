//! Time-series store published by a completed directory load
//!
//! The store owns one ordered series per field, keyed by display name. It
//! is created whole by the loader and never mutated afterwards: a reload
//! builds and publishes a brand-new store. Consumers (resampler, windrose
//! engine, plotting callers) only ever read from it.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::app::models::{Capability, FieldDescriptor, TimeSeries, Value};
use crate::app::services::field_registry::FieldRegistry;
use crate::app::services::resampler;
use crate::{Error, Result};

/// Read-only store of per-field time series for one loaded directory
#[derive(Debug, Clone)]
pub struct TimeSeriesStore {
    descriptors: Vec<FieldDescriptor>,
    series: Vec<TimeSeries>,
    by_display: HashMap<String, usize>,
    registry: FieldRegistry,
}

impl TimeSeriesStore {
    /// Assemble a store from parallel descriptor/series tables.
    ///
    /// Called by the loader once conversion and classification are done;
    /// the tables must be index-aligned.
    pub(crate) fn publish(
        descriptors: Vec<FieldDescriptor>,
        series: Vec<TimeSeries>,
        registry: FieldRegistry,
    ) -> Result<Self> {
        if descriptors.len() != series.len() {
            return Err(Error::data_validation(format!(
                "descriptor count {} does not match series count {}",
                descriptors.len(),
                series.len()
            )));
        }

        let mut by_display = HashMap::with_capacity(descriptors.len());
        for (index, descriptor) in descriptors.iter().enumerate() {
            by_display.insert(descriptor.display_name.clone(), index);
        }

        Ok(Self {
            descriptors,
            series,
            by_display,
            registry,
        })
    }

    fn index_of(&self, display_name: &str) -> Result<usize> {
        self.by_display
            .get(display_name)
            .copied()
            .ok_or_else(|| Error::field_not_found(display_name))
    }

    /// Number of fields in the store
    pub fn field_count(&self) -> usize {
        self.descriptors.len()
    }

    /// All field descriptors, in load order
    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    /// Descriptor for a display name
    pub fn descriptor(&self, display_name: &str) -> Result<&FieldDescriptor> {
        Ok(&self.descriptors[self.index_of(display_name)?])
    }

    /// True if a series with this display name exists
    pub fn has_series(&self, display_name: &str) -> bool {
        self.by_display.contains_key(display_name)
    }

    /// Length of a series, or 0 if no such series exists
    pub fn series_len(&self, display_name: &str) -> usize {
        self.index_of(display_name)
            .map(|index| self.series[index].len())
            .unwrap_or(0)
    }

    /// Full series for a display name
    pub fn series(&self, display_name: &str) -> Result<&TimeSeries> {
        Ok(&self.series[self.index_of(display_name)?])
    }

    /// Timestamps for a display name
    pub fn timestamps(&self, display_name: &str) -> Result<&[NaiveDateTime]> {
        Ok(self.series(display_name)?.timestamps())
    }

    /// Values for a display name
    pub fn values(&self, display_name: &str) -> Result<&[Value]> {
        Ok(self.series(display_name)?.values())
    }

    /// Values for a display name as floats; the field must be numeric
    pub fn numeric_values(&self, display_name: &str) -> Result<Vec<f64>> {
        self.series(display_name)?.numeric_values().ok_or_else(|| {
            Error::data_validation(format!(
                "field '{}' holds non-numeric samples",
                display_name
            ))
        })
    }

    /// Display names of all fields classified as numeric, in load order
    pub fn numeric_display_names(&self) -> Vec<String> {
        self.descriptors
            .iter()
            .filter(|d| d.is_numeric)
            .map(|d| d.display_name.clone())
            .collect()
    }

    /// Raw header names of all fields classified as numeric, in load order
    pub fn numeric_raw_names(&self) -> Vec<String> {
        self.descriptors
            .iter()
            .filter(|d| d.is_numeric)
            .map(|d| d.raw_name.clone())
            .collect()
    }

    /// Display name for a raw header name
    pub fn display_name(&self, raw_name: &str) -> Result<&str> {
        self.descriptors
            .iter()
            .find(|d| d.raw_name == raw_name)
            .map(|d| d.display_name.as_str())
            .ok_or_else(|| Error::field_not_found(raw_name))
    }

    /// Raw header name for a display name
    pub fn raw_name(&self, display_name: &str) -> Result<&str> {
        Ok(self.descriptor(display_name)?.raw_name.as_str())
    }

    /// Extra view capabilities for a display name.
    ///
    /// Unknown display names are a caller error; a known field with no
    /// registered conversion simply has no extra views.
    pub fn capabilities(&self, display_name: &str) -> Result<Vec<Capability>> {
        let descriptor = self.descriptor(display_name)?;
        match self.registry.special_field(&descriptor.raw_name) {
            Some(special) => Ok(special.capabilities(self)),
            None => Ok(Vec::new()),
        }
    }

    /// Bucket-averaged view of a series.
    ///
    /// Returns a new series decoupled from the store; the stored series is
    /// untouched.
    pub fn resampled(&self, display_name: &str, bucket_width_seconds: u64) -> Result<TimeSeries> {
        resampler::resample_mean(self.series(display_name)?, bucket_width_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::SpecialTag;
    use chrono::NaiveDate;

    fn series_of(values: &[f64]) -> TimeSeries {
        let base = NaiveDate::from_ymd_opt(2015, 6, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        TimeSeries::from_samples(
            values
                .iter()
                .enumerate()
                .map(|(i, v)| (base + chrono::Duration::seconds(30 * i as i64), Value::Number(*v)))
                .collect(),
        )
    }

    fn test_store() -> TimeSeriesStore {
        let descriptors = vec![
            FieldDescriptor {
                raw_name: "Temperature".to_string(),
                display_name: "Temperature".to_string(),
                is_numeric: true,
                tag: None,
            },
            FieldDescriptor {
                raw_name: "Notes".to_string(),
                display_name: "Notes".to_string(),
                is_numeric: false,
                tag: None,
            },
            FieldDescriptor {
                raw_name: "Wind Pulses".to_string(),
                display_name: "Wind Speed".to_string(),
                is_numeric: true,
                tag: Some(SpecialTag::Windspeed),
            },
        ];
        let series = vec![
            series_of(&[21.5, 21.6, 21.4]),
            TimeSeries::from_samples(vec![(
                NaiveDate::from_ymd_opt(2015, 6, 1)
                    .unwrap()
                    .and_hms_opt(10, 0, 0)
                    .unwrap(),
                Value::Text("ok".to_string()),
            )]),
            series_of(&[0.23, 0.35]),
        ];
        let registry = FieldRegistry::from_config(&crate::Config::default());
        TimeSeriesStore::publish(descriptors, series, registry).unwrap()
    }

    #[test]
    fn test_lookup_by_display_name() {
        let store = test_store();

        assert!(store.has_series("Wind Speed"));
        assert!(!store.has_series("Wind Pulses"));
        assert_eq!(store.series_len("Wind Speed"), 2);
        assert_eq!(store.series_len("Missing"), 0);
        assert_eq!(store.raw_name("Wind Speed").unwrap(), "Wind Pulses");
        assert_eq!(store.display_name("Wind Pulses").unwrap(), "Wind Speed");
    }

    #[test]
    fn test_unknown_display_name_is_not_found() {
        let store = test_store();
        assert!(matches!(
            store.timestamps("Pressure"),
            Err(Error::FieldNotFound { .. })
        ));
    }

    #[test]
    fn test_numeric_display_names() {
        let store = test_store();
        assert_eq!(
            store.numeric_display_names(),
            vec!["Temperature".to_string(), "Wind Speed".to_string()]
        );
        assert_eq!(
            store.numeric_raw_names(),
            vec!["Temperature".to_string(), "Wind Pulses".to_string()]
        );
    }

    #[test]
    fn test_capabilities_plain_field_is_empty() {
        let store = test_store();
        assert_eq!(store.capabilities("Temperature").unwrap(), Vec::new());
    }

    #[test]
    fn test_capabilities_wind_speed_without_direction() {
        let store = test_store();
        assert_eq!(
            store.capabilities("Wind Speed").unwrap(),
            vec![Capability::Histogram]
        );
    }

    #[test]
    fn test_numeric_values_rejects_text_field() {
        let store = test_store();
        assert!(store.numeric_values("Notes").is_err());
        assert_eq!(store.numeric_values("Temperature").unwrap().len(), 3);
    }
}
