//! Datalogger CSV Processor Library
//!
//! A Rust library for turning directories of per-day datalogger CSV files
//! into unified, queryable per-field time series.
//!
//! This library provides tools for:
//! - Parsing datalogger CSV files with the fixed `Reference, Date, Time` key prefix
//! - Merging rows from many files into one time-sorted series per field
//! - Applying field-specific physical conversions (humidity scale,
//!   pulse counter to wind speed, cardinal direction to degrees)
//! - Time-bucket averaging of any numeric series
//! - Windrose binning of paired speed/direction samples
//! - Background loading with a polled 0-100 progress channel

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod field_registry;
        pub mod loader;
        pub mod log_csv_parser;
        pub mod resampler;
        pub mod special_fields;
        pub mod store;
        pub mod windrose;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Capability, FieldDescriptor, TimeSeries, Value};
pub use app::services::store::TimeSeriesStore;
pub use config::Config;

/// Result type alias for datalogger processing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for datalogger processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Log file format error (bad header, malformed row)
    #[error("Invalid log format in file '{file}': {message}")]
    InvalidFormat { file: String, message: String },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Requested field does not exist in the store
    #[error("Field not found: '{name}'")]
    FieldNotFound { name: String },

    /// Caller-supplied data violated a precondition
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Background load terminated without producing a store
    #[error("Load interrupted: {reason}")]
    LoadInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a log format error
    pub fn invalid_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a field-not-found error
    pub fn field_not_found(name: impl Into<String>) -> Self {
        Self::FieldNotFound { name: name.into() }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a load interruption error
    pub fn load_interrupted(reason: impl Into<String>) -> Self {
        Self::LoadInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}
