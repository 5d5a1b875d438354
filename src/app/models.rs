//! Data models for datalogger processing
//!
//! This module contains the core data structures for representing parsed log
//! rows, per-field time series and the field metadata built on every load.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// =============================================================================
// Cell Values
// =============================================================================

/// A single cell value from a log file.
///
/// Cells are auto-detected at parse time: anything representable as a float
/// becomes `Number`, everything else stays `Text`. A failed numeric parse is
/// never an error; the cell simply keeps its text form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Numeric reading
    Number(f64),
    /// Non-numeric cell retained verbatim
    Text(String),
}

impl Value {
    /// Parse a raw cell, preferring a numeric interpretation
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(number) => Value::Number(number),
            Err(_) => Value::Text(trimmed.to_string()),
        }
    }

    /// Numeric value of this cell, if it has one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// True if this cell parsed as a number
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(t) => write!(f, "{}", t),
        }
    }
}

// =============================================================================
// Raw Records
// =============================================================================

/// One parsed log row: reference id, combined timestamp and the remaining
/// cells in header order. Ephemeral; consumed by the merge step.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// Logger reference id (first column)
    pub reference: String,

    /// Timestamp combined from the Date and Time columns
    pub timestamp: NaiveDateTime,

    /// One value per data field, in header order
    pub values: Vec<Value>,
}

// =============================================================================
// Time Series
// =============================================================================

/// An ordered sequence of timestamped values for one field.
///
/// Timestamps are non-decreasing after a load. A series is immutable once
/// published in a store; conversions and resampling always produce a new
/// series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeries {
    timestamps: Vec<NaiveDateTime>,
    values: Vec<Value>,
}

impl TimeSeries {
    /// Create a series from parallel timestamp/value vectors
    pub fn new(timestamps: Vec<NaiveDateTime>, values: Vec<Value>) -> crate::Result<Self> {
        if timestamps.len() != values.len() {
            return Err(crate::Error::data_validation(format!(
                "timestamp count {} does not match value count {}",
                timestamps.len(),
                values.len()
            )));
        }
        Ok(Self { timestamps, values })
    }

    /// Create a series from (timestamp, value) samples
    pub fn from_samples(samples: Vec<(NaiveDateTime, Value)>) -> Self {
        let (timestamps, values) = samples.into_iter().unzip();
        Self { timestamps, values }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// True if the series holds no samples
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Sample timestamps, oldest first
    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    /// Sample values, in timestamp order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Iterate over (timestamp, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDateTime, &Value)> {
        self.timestamps.iter().zip(self.values.iter())
    }

    /// True if every cell of the series is numeric
    pub fn is_fully_numeric(&self) -> bool {
        self.values.iter().all(Value::is_number)
    }

    /// All values as floats, if every cell is numeric
    pub fn numeric_values(&self) -> Option<Vec<f64>> {
        self.values.iter().map(Value::as_number).collect()
    }
}

// =============================================================================
// Field Metadata
// =============================================================================

/// Conversion strategies a raw field can be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialTag {
    /// Fractional humidity scaled to a percentage
    Humidity,
    /// Pulse counter converted to an instantaneous speed
    Windspeed,
    /// Cardinal compass labels converted to degrees
    WindDirection,
}

/// Descriptor for one loaded field: raw CSV header name, human-facing
/// display name, numeric classification and optional conversion tag.
///
/// Built once per load and treated as immutable until the next load
/// replaces the whole table.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Column name exactly as it appears in the file header (trimmed)
    pub raw_name: String,

    /// Human-facing name; equals `raw_name` unless a conversion renames it
    pub display_name: String,

    /// True if every post-conversion cell of the field is numeric
    pub is_numeric: bool,

    /// Conversion applied to this field, if any
    pub tag: Option<SpecialTag>,
}

// =============================================================================
// Capabilities
// =============================================================================

/// Extra views a converted field can offer beyond a plain series plot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Magnitude distribution view
    Histogram,
    /// Paired speed/direction polar view
    Windrose,
}

impl Capability {
    /// Stable label used by callers to key view menus
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Histogram => "Histogram",
            Capability::Windrose => "Windrose",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
