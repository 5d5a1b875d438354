//! CSV parser for datalogger files
//!
//! This module parses individual datalogger CSV files into raw records.
//! Every file starts with a header row whose first three columns are the
//! fixed `Reference, Date, Time` key prefix; the remaining columns define
//! the data fields for that file.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - File-level parsing orchestration
//! - [`header`] - Header validation and field schema extraction
//! - [`record_parser`] - Individual row parsing (timestamp assembly,
//!   per-cell numeric auto-detection)
//!
//! ## Error policy
//!
//! A bad header or a malformed row is fatal to the file (and therefore to
//! the whole load). A cell that fails numeric conversion is not an error;
//! the cell is retained as text.

pub mod header;
pub mod parser;
pub mod record_parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::FileSchema;
pub use parser::{ParsedFile, parse_log_file};
