//! Load orchestration
//!
//! Parses every discovered log file, merges all rows into time order,
//! splits them into per-field series, applies special field conversions
//! and publishes a fresh [`TimeSeriesStore`]. Runs on a blocking worker
//! so callers can keep polling progress while files are read.

use std::path::PathBuf;

use tokio::sync::mpsc;
use tracing::{debug, info};

use super::discovery::log_filenames;
use super::progress::{ProgressSender, progress_channel};
use crate::app::models::{FieldDescriptor, TimeSeries};
use crate::app::services::field_registry::FieldRegistry;
use crate::app::services::log_csv_parser::{FileSchema, parse_log_file};
use crate::app::services::store::TimeSeriesStore;
use crate::config::Config;
use crate::constants::progress;
use crate::{Error, Result};

/// Loader for one datalogger directory.
///
/// A loader performs exactly one load and is consumed by it. Starting a
/// second load while one is in flight is unsupported; callers must wait
/// for the terminal progress value before spawning another loader.
#[derive(Debug)]
pub struct DirectoryLoader {
    folder: PathBuf,
    config: Config,
}

impl DirectoryLoader {
    /// Create a loader for a directory with the given configuration
    pub fn new(folder: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            folder: folder.into(),
            config,
        }
    }

    /// Start the load on a blocking worker and return a polling handle
    pub fn spawn(self) -> LoadHandle {
        let (sender, receiver) = progress_channel();
        let handle = tokio::task::spawn_blocking(move || self.run(sender));
        LoadHandle {
            progress: receiver,
            handle,
        }
    }

    /// Run the load synchronously, discarding progress reports.
    ///
    /// Mostly useful for tests and one-shot tooling; interactive callers
    /// should prefer [`DirectoryLoader::spawn`].
    pub fn load(self) -> Result<TimeSeriesStore> {
        let (sender, _receiver) = progress_channel();
        self.run(sender)
    }

    fn run(&self, mut progress: ProgressSender) -> Result<TimeSeriesStore> {
        info!("Loading datalogger directory {}", self.folder.display());

        let registry = FieldRegistry::from_config(&self.config);

        let filenames = log_filenames(&self.folder)?;
        if filenames.is_empty() {
            return Err(Error::data_validation(format!(
                "no log files found in '{}'",
                self.folder.display()
            )));
        }

        // Parse every file against the first file's schema
        let total_files = filenames.len();
        let mut schema: Option<FileSchema> = None;
        let mut records = Vec::new();

        for (index, path) in filenames.iter().enumerate() {
            let parsed = parse_log_file(path)?;

            match &schema {
                None => schema = Some(parsed.schema.clone()),
                Some(first) => {
                    if parsed.schema != *first {
                        return Err(Error::invalid_format(
                            path.display().to_string(),
                            format!(
                                "field list {:?} does not match the first file's {:?}",
                                parsed.schema.field_names, first.field_names
                            ),
                        ));
                    }
                }
            }

            debug!(
                "File {}/{}: {} records from {}",
                index + 1,
                total_files,
                parsed.record_count(),
                path.display()
            );
            records.extend(parsed.records);

            progress.send((((index + 1) * progress::FILE_SPAN as usize) / total_files) as u8);
        }

        let schema = schema.ok_or_else(|| {
            Error::data_validation(format!(
                "no log files found in '{}'",
                self.folder.display()
            ))
        })?;
        info!(
            "Parsed {} records across {} files",
            records.len(),
            total_files
        );

        // Merge all rows into time order; stable, so equal timestamps keep
        // their file order
        records.sort_by_key(|record| record.timestamp);
        progress.send(progress::MERGE);

        // Resolve display names for the merged field set
        for raw_name in &schema.field_names {
            let display_name = registry.display_name(raw_name);
            if display_name != raw_name.as_str() {
                debug!("Field '{}' published as '{}'", raw_name, display_name);
            }
        }
        progress.send(progress::RENAME);

        // Split the merged rows into one series per field; all series share
        // the same timestamp index at this point
        let mut raw_series = Vec::with_capacity(schema.field_count());
        for field_index in 0..schema.field_count() {
            let samples = records
                .iter()
                .map(|record| (record.timestamp, record.values[field_index].clone()))
                .collect();
            raw_series.push(TimeSeries::from_samples(samples));
        }
        progress.send(progress::SPLIT);

        // Apply special conversions; unregistered fields pass through
        let mut converted_series = Vec::with_capacity(raw_series.len());
        for (raw_name, series) in schema.field_names.iter().zip(raw_series.into_iter()) {
            match registry.special_field(raw_name) {
                Some(special) => {
                    let converted = special.convert(&series)?;
                    info!("Applied special conversion to field '{}'", raw_name);
                    converted_series.push(converted);
                }
                None => converted_series.push(series),
            }
        }
        progress.send(progress::CONVERT);

        // Classify and publish
        let descriptors: Vec<FieldDescriptor> = schema
            .field_names
            .iter()
            .zip(converted_series.iter())
            .map(|(raw_name, series)| registry.describe(raw_name, series))
            .collect();

        let store = TimeSeriesStore::publish(descriptors, converted_series, registry)?;

        progress.send(progress::DONE);
        info!("Load complete: {} fields published", store.field_count());

        Ok(store)
    }
}

/// Handle to an in-flight background load.
///
/// Poll [`try_progress`](LoadHandle::try_progress) on a short interval;
/// once 100 has been observed (or the worker finished), call
/// [`join`](LoadHandle::join) to take the store or the load error.
#[derive(Debug)]
pub struct LoadHandle {
    progress: mpsc::UnboundedReceiver<u8>,
    handle: tokio::task::JoinHandle<Result<TimeSeriesStore>>,
}

impl LoadHandle {
    /// Next pending progress value, if any. Non-blocking; `None` means
    /// nothing new has been reported yet.
    pub fn try_progress(&mut self) -> Option<u8> {
        self.progress.try_recv().ok()
    }

    /// True once the load worker has finished, successfully or not
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the load to finish and take its result
    pub async fn join(self) -> Result<TimeSeriesStore> {
        self.handle
            .await
            .map_err(|e| Error::load_interrupted(format!("load worker terminated: {}", e)))?
    }
}
