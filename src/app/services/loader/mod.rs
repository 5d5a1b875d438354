//! Directory loader for datalogger CSV archives
//!
//! The loader discovers log files in a directory, parses them all, merges
//! their rows into one time-sorted series per field, applies the special
//! field conversions and publishes the result as a [`TimeSeriesStore`].
//!
//! ## Architecture
//!
//! - [`discovery`] - Non-recursive log file discovery and the
//!   "has data files" precondition query
//! - [`progress`] - The 0-100 polled progress channel protocol
//! - [`loader`] - Load orchestration, run on a blocking worker so the
//!   rest of the application stays responsive
//!
//! ## Contract
//!
//! Progress values are non-decreasing; 100 is emitted exactly once, last,
//! and is the only value that means the store is ready. A load either
//! completes fully or fails without publishing anything; there is no
//! partial store and no cancellation.
//!
//! [`TimeSeriesStore`]: crate::app::services::store::TimeSeriesStore

pub mod discovery;
pub mod loader;
pub mod progress;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use discovery::{directory_has_data_files, log_filenames};
pub use loader::{DirectoryLoader, LoadHandle};
pub use progress::{ProgressSender, progress_channel};
