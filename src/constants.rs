//! Application constants for the datalogger processor
//!
//! This module contains the fixed file-format contract, field-conversion
//! tables, progress checkpoints and default values used throughout the
//! datalogger processor.

// =============================================================================
// Log File Format
// =============================================================================

/// Required first three header columns of every log file
pub const HEADER_PREFIX: &[&str] = &["Reference", "Date", "Time"];

/// Timestamp layout built from the Date and Time columns (day-first)
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// File extension accepted by directory discovery (matched case-insensitively)
pub const LOG_FILE_EXTENSION: &str = "csv";

// =============================================================================
// Special Fields
// =============================================================================

/// Raw header name of the humidity field
pub const FIELD_HUMIDITY: &str = "Humidity";

/// Raw header name of the anemometer pulse-counter field
pub const FIELD_WIND_PULSES: &str = "Wind Pulses";

/// Raw header name of the wind direction field
pub const FIELD_DIRECTION: &str = "Direction";

/// Display name given to the converted pulse-counter field
pub const DISPLAY_WIND_SPEED: &str = "Wind Speed";

/// Humidity arrives as a 0.0-1.0 fraction and is displayed as a percentage
pub const HUMIDITY_SCALE: f64 = 100.0;

/// Default anemometer calibration factor (pulses per second to m/s)
pub const DEFAULT_CALIBRATION_FACTOR: f64 = 0.7;

/// Cardinal compass labels and their bearing in degrees, North referenced.
/// Labels outside this vocabulary carry no usable bearing and are dropped.
pub const CARDINAL_DEGREES: &[(&str, f64)] = &[
    ("N", 0.0),
    ("NE", 45.0),
    ("E", 90.0),
    ("SE", 135.0),
    ("S", 180.0),
    ("SW", 225.0),
    ("W", 270.0),
    ("NW", 315.0),
];

// =============================================================================
// Load Progress Protocol
// =============================================================================

/// Progress checkpoint values emitted by the directory loader.
///
/// File reads scale across 0..=FILE_SPAN; the post-read stages emit the
/// fixed checkpoints. DONE is sent exactly once, last, and is the only
/// value that signals the store is ready to read.
pub mod progress {
    /// File reading occupies the 0..=95 range, scaled by files completed
    pub const FILE_SPAN: u8 = 95;

    /// All rows merged and time-sorted
    pub const MERGE: u8 = 96;

    /// Display-name mapping resolved
    pub const RENAME: u8 = 97;

    /// Merged rows split into per-field series
    pub const SPLIT: u8 = 98;

    /// Special field conversions applied
    pub const CONVERT: u8 = 99;

    /// Load complete, store published
    pub const DONE: u8 = 100;
}

// =============================================================================
// Windrose Defaults
// =============================================================================

/// Default number of direction sectors (22.5 degrees each)
pub const DEFAULT_SECTOR_COUNT: usize = 16;

/// Default number of magnitude bin edges spread between observed min and max
pub const DEFAULT_MAGNITUDE_EDGE_COUNT: usize = 6;

/// Compass point labels for the default 16-sector rose, clockwise from North
pub const COMPASS_POINTS_16: &[&str] = &[
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

// =============================================================================
// Display Defaults
// =============================================================================

/// Raw field names plotted first after a load, in order
pub const DEFAULT_FIELDS: &[&str] = &["Temperature", "Humidity", "Wind Pulses"];

/// Unit suffixes for display-name label decoration
pub const UNIT_SUFFIXES: &[(&str, &str)] = &[
    ("Temperature", "\u{b0}C"),
    ("Humidity", "%"),
    ("Wind Speed", "m/s"),
    ("Direction", "\u{b0}"),
];
