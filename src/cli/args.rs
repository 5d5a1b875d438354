//! Command-line argument definitions for the datalogger processor
//!
//! This module defines the CLI interface using the clap derive API. The
//! binary is a thin consumer of the processing core: it loads a directory,
//! prints a field summary and optionally a resampled or windrose view.

use crate::config::Config;
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the datalogger processor
///
/// Loads a directory of datalogger CSV files into unified per-field time
/// series and reports on them.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "datalog-processor",
    version,
    about = "Merge datalogger CSV files into unified time series with unit conversion, averaging and windrose statistics",
    long_about = "Reads every CSV file in a directory, merges the rows into one \
                  time-sorted series per field, converts physically-derived fields \
                  (humidity fraction, anemometer pulses, cardinal wind direction) \
                  and prints summaries, bucket-averaged views and windrose tables."
)]
pub struct Args {
    /// Directory containing datalogger CSV files
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Anemometer calibration factor (pulses per second to m/s)
    #[arg(long, value_name = "FACTOR")]
    pub calibration: Option<f64>,

    /// Print a bucket-averaged view of a field, e.g. "Wind Speed:600"
    #[arg(long, value_name = "FIELD:SECONDS")]
    pub average: Option<String>,

    /// Print the windrose table for the wind speed/direction pair
    #[arg(long)]
    pub windrose: bool,

    /// Number of windrose direction sectors
    #[arg(long, default_value_t = crate::constants::DEFAULT_SECTOR_COUNT, value_name = "COUNT")]
    pub sectors: usize,

    /// Show windrose cells as percentages summing to 100
    #[arg(long)]
    pub normalized: bool,

    /// Rotate the windrose to show where the wind blows to
    #[arg(long)]
    pub blowto: bool,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Processing configuration with CLI overrides applied
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(factor) = self.calibration {
            config.calibration_factor = factor;
        }
        config
    }

    /// Parsed `--average` request as (display name, bucket seconds).
    ///
    /// The bucket width must be a positive integer; zero is rejected here,
    /// before the resampler is ever invoked.
    pub fn average_request(&self) -> Result<Option<(String, u64)>> {
        let Some(raw) = &self.average else {
            return Ok(None);
        };

        let (field, seconds) = raw.rsplit_once(':').ok_or_else(|| {
            Error::data_validation(format!(
                "invalid --average '{}' (expected FIELD:SECONDS)",
                raw
            ))
        })?;

        let width: u64 = seconds.trim().parse().map_err(|_| {
            Error::data_validation(format!("invalid averaging period '{}'", seconds))
        })?;
        if width == 0 {
            return Err(Error::data_validation(
                "averaging period must be greater than zero seconds",
            ));
        }

        Ok(Some((field.trim().to_string(), width)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["datalog-processor", "/tmp/logs"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let args = args(&[]);
        assert_eq!(args.sectors, 16);
        assert!(!args.windrose);
        assert!(args.average_request().unwrap().is_none());
        assert_eq!(args.config().calibration_factor, 0.7);
    }

    #[test]
    fn test_calibration_override() {
        let args = args(&["--calibration", "1.25"]);
        assert_eq!(args.config().calibration_factor, 1.25);
    }

    #[test]
    fn test_average_request_parsing() {
        let args = args(&["--average", "Wind Speed:600"]);
        assert_eq!(
            args.average_request().unwrap(),
            Some(("Wind Speed".to_string(), 600))
        );
    }

    #[test]
    fn test_average_request_rejects_zero_width() {
        let args = args(&["--average", "Humidity:0"]);
        assert!(args.average_request().is_err());
    }

    #[test]
    fn test_average_request_rejects_garbage() {
        let args = args(&["--average", "Humidity"]);
        assert!(args.average_request().is_err());
    }
}
