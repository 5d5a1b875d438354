//! Field registry mapping raw header names to conversion strategies
//!
//! The registry is constructed once per load from the configuration and
//! passed explicitly to the loader. It answers two questions: does a raw
//! field carry a special conversion, and what display name should it be
//! published under.

use std::collections::HashMap;

use crate::app::models::{FieldDescriptor, TimeSeries};
use crate::app::services::special_fields::SpecialField;
use crate::config::Config;
use crate::constants::{FIELD_DIRECTION, FIELD_HUMIDITY, FIELD_WIND_PULSES};

/// Registry of raw field names with special conversion strategies
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    special_fields: HashMap<String, SpecialField>,
}

impl FieldRegistry {
    /// Build a registry with explicit wiring
    pub fn new(special_fields: HashMap<String, SpecialField>) -> Self {
        Self { special_fields }
    }

    /// Build the standard datalogger wiring from configuration.
    ///
    /// Humidity, the anemometer pulse counter and the wind direction field
    /// are the fields this logger family derives physically; everything
    /// else is stored untouched.
    pub fn from_config(config: &Config) -> Self {
        let mut special_fields = HashMap::new();
        special_fields.insert(FIELD_HUMIDITY.to_string(), SpecialField::Humidity);
        special_fields.insert(
            FIELD_WIND_PULSES.to_string(),
            SpecialField::Windspeed {
                calibration_factor: config.calibration_factor,
            },
        );
        special_fields.insert(FIELD_DIRECTION.to_string(), SpecialField::WindDirection);

        Self { special_fields }
    }

    /// Registry with no special fields (every field passes through)
    pub fn empty() -> Self {
        Self {
            special_fields: HashMap::new(),
        }
    }

    /// Conversion strategy registered for a raw field name, if any
    pub fn special_field(&self, raw_name: &str) -> Option<&SpecialField> {
        self.special_fields.get(raw_name)
    }

    /// Display name a raw field is published under.
    ///
    /// Fields without a registered conversion keep their raw name.
    pub fn display_name<'a>(&'a self, raw_name: &'a str) -> &'a str {
        match self.special_fields.get(raw_name) {
            Some(field) => field.display_name(),
            None => raw_name,
        }
    }

    /// Build the descriptor for a field from its post-conversion series
    pub fn describe(&self, raw_name: &str, series: &TimeSeries) -> FieldDescriptor {
        let special = self.special_fields.get(raw_name);
        FieldDescriptor {
            raw_name: raw_name.to_string(),
            display_name: self.display_name(raw_name).to_string(),
            is_numeric: series.is_fully_numeric(),
            tag: special.map(SpecialField::tag),
        }
    }
}
