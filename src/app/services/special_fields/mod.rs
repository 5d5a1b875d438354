//! Special field conversions
//!
//! Some raw log fields need a physical conversion before they are useful:
//! humidity arrives as a 0.0-1.0 fraction, wind speed arrives as a raw
//! anemometer pulse count, and wind direction arrives as cardinal compass
//! labels. This module implements those conversions as a closed set of
//! strategies dispatched through a single entry point.
//!
//! Conversions never mutate their input; each returns a brand-new series.
//! Windspeed and WindDirection both drop the first raw sample so the two
//! converted series stay index-paired by position.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::app::models::{Capability, SpecialTag, TimeSeries, Value};
use crate::app::services::store::TimeSeriesStore;
use crate::constants::{CARDINAL_DEGREES, DISPLAY_WIND_SPEED, FIELD_DIRECTION, HUMIDITY_SCALE};
use crate::{Error, Result};

#[cfg(test)]
pub mod tests;

/// One conversion strategy for a physically-derived field.
///
/// The set is closed: a field either matches one of these tags in the
/// registry or it is stored untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecialField {
    /// Fractional humidity scaled to a percentage
    Humidity,
    /// Pulse counter converted to speed via a fixed calibration factor
    Windspeed {
        /// Multiplier from pulses-per-second to m/s
        calibration_factor: f64,
    },
    /// Cardinal compass labels converted to degrees
    WindDirection,
}

impl SpecialField {
    /// Conversion tag recorded on the field descriptor
    pub fn tag(&self) -> SpecialTag {
        match self {
            SpecialField::Humidity => SpecialTag::Humidity,
            SpecialField::Windspeed { .. } => SpecialTag::Windspeed,
            SpecialField::WindDirection => SpecialTag::WindDirection,
        }
    }

    /// Display name the converted field is published under
    pub fn display_name(&self) -> &'static str {
        match self {
            SpecialField::Humidity => "Humidity",
            SpecialField::Windspeed { .. } => DISPLAY_WIND_SPEED,
            SpecialField::WindDirection => FIELD_DIRECTION,
        }
    }

    /// Apply this conversion to a raw series, producing a new series
    pub fn convert(&self, series: &TimeSeries) -> Result<TimeSeries> {
        match self {
            SpecialField::Humidity => convert_humidity(series),
            SpecialField::Windspeed { calibration_factor } => {
                convert_windspeed(series, *calibration_factor)
            }
            SpecialField::WindDirection => convert_wind_direction(series),
        }
    }

    /// Extra views this field offers, given the rest of the store.
    ///
    /// Wind speed can always be shown as a histogram; the windrose view
    /// additionally needs a Direction series of exactly equal length.
    pub fn capabilities(&self, store: &TimeSeriesStore) -> Vec<Capability> {
        match self {
            SpecialField::Windspeed { .. } => {
                let mut caps = vec![Capability::Histogram];

                let speed_len = store.series_len(DISPLAY_WIND_SPEED);
                let direction_len = store.series_len(FIELD_DIRECTION);
                if store.has_series(FIELD_DIRECTION) && direction_len == speed_len {
                    caps.push(Capability::Windrose);
                }

                caps
            }
            SpecialField::Humidity | SpecialField::WindDirection => Vec::new(),
        }
    }
}

/// Scale fractional humidity to a percentage. Length-preserving; text
/// cells pass through unchanged.
fn convert_humidity(series: &TimeSeries) -> Result<TimeSeries> {
    let samples = series
        .iter()
        .map(|(timestamp, value)| {
            let converted = match value {
                Value::Number(fraction) => Value::Number(fraction * HUMIDITY_SCALE),
                Value::Text(text) => Value::Text(text.clone()),
            };
            (*timestamp, converted)
        })
        .collect();

    Ok(TimeSeries::from_samples(samples))
}

/// Convert a pulse counter into instantaneous speed.
///
/// Each adjacent sample pair becomes one output sample: the pulse count at
/// the end of the interval, calibrated and divided by the interval length,
/// timestamped at the interval midpoint. The first raw sample has no
/// preceding reference and is dropped, so the output is one shorter than
/// the input. Timestamps must be strictly increasing and every sample must
/// be numeric.
fn convert_windspeed(series: &TimeSeries, calibration_factor: f64) -> Result<TimeSeries> {
    let timestamps = series.timestamps();
    let values = series.values();

    let mut samples: Vec<(NaiveDateTime, Value)> = Vec::with_capacity(series.len().saturating_sub(1));

    for i in 1..series.len() {
        let interval = timestamps[i] - timestamps[i - 1];
        let elapsed_seconds = interval.num_milliseconds() as f64 / 1000.0;
        if elapsed_seconds <= 0.0 {
            return Err(Error::data_validation(format!(
                "pulse timestamps must be strictly increasing (found {} after {})",
                timestamps[i],
                timestamps[i - 1]
            )));
        }

        let pulses = values[i].as_number().ok_or_else(|| {
            Error::data_validation(format!(
                "non-numeric pulse sample '{}' at {}",
                values[i], timestamps[i]
            ))
        })?;

        let speed = pulses * calibration_factor / elapsed_seconds;
        let midpoint = timestamps[i - 1] + interval / 2;
        samples.push((midpoint, Value::Number(speed)));
    }

    Ok(TimeSeries::from_samples(samples))
}

/// Convert cardinal compass labels to degrees.
///
/// The first sample is dropped to stay index-paired with the converted
/// wind speed series. Labels outside the 8-point vocabulary are dropped
/// entirely rather than kept as placeholders; cells that are already
/// numeric bearings pass through.
fn convert_wind_direction(series: &TimeSeries) -> Result<TimeSeries> {
    let mut samples = Vec::with_capacity(series.len().saturating_sub(1));
    let mut dropped = 0usize;

    for (timestamp, value) in series.iter().skip(1) {
        match value {
            Value::Number(degrees) => samples.push((*timestamp, Value::Number(*degrees))),
            Value::Text(label) => match cardinal_to_degrees(label) {
                Some(degrees) => samples.push((*timestamp, Value::Number(degrees))),
                None => dropped += 1,
            },
        }
    }

    if dropped > 0 {
        debug!("Dropped {} unrecognized direction labels", dropped);
    }

    Ok(TimeSeries::from_samples(samples))
}

/// Bearing in degrees for a cardinal compass label, if recognized
fn cardinal_to_degrees(label: &str) -> Option<f64> {
    let trimmed = label.trim();
    CARDINAL_DEGREES
        .iter()
        .find(|(name, _)| *name == trimmed)
        .map(|(_, degrees)| *degrees)
}
