//! Command implementation for the datalogger processor CLI
//!
//! Drives the processing core the way an interactive caller would: checks
//! the "has data files" precondition, spawns the background load, polls
//! the progress channel on a short interval, then reports on the
//! published store.

use std::path::Path;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::app::services::loader::{DirectoryLoader, directory_has_data_files};
use crate::app::services::store::TimeSeriesStore;
use crate::app::services::windrose::{self, WindroseOptions};
use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::progress::DONE;
use crate::constants::{DISPLAY_WIND_SPEED, FIELD_DIRECTION};
use crate::app::models::Capability;
use crate::{Error, Result};

/// How often the progress channel is polled while a load is in flight
const PROGRESS_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the CLI: load the directory, then print the requested reports
pub async fn run(args: Args) -> Result<()> {
    if !directory_has_data_files(&args.folder) {
        return Err(Error::data_validation(format!(
            "no datalogger CSV files found in '{}'",
            args.folder.display()
        )));
    }

    let config = args.config();
    info!("Processing directory {}", args.folder.display());

    let store = load_with_progress(&args.folder, config.clone()).await?;

    print_summary(&store, &config);

    if let Some((field, width)) = args.average_request()? {
        print_average(&store, &config, &field, width)?;
    }

    if args.windrose {
        print_windrose(&store, &args)?;
    }

    Ok(())
}

/// Spawn the background load and poll its progress channel until the
/// terminal value arrives or the worker stops.
async fn load_with_progress(folder: &Path, config: Config) -> Result<TimeSeriesStore> {
    let mut handle = DirectoryLoader::new(folder, config).spawn();

    let bar = ProgressBar::new(DONE as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}% {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    bar.set_message("Loading log files");

    let mut ticker = tokio::time::interval(PROGRESS_POLL_INTERVAL);
    'poll: loop {
        ticker.tick().await;

        // Drain everything reported since the last tick; an empty channel
        // just means nothing new yet
        let mut latest = None;
        while let Some(percent) = handle.try_progress() {
            latest = Some(percent);
        }
        if let Some(percent) = latest {
            bar.set_position(percent as u64);
            debug!("Load progress {}%", percent);
            if percent == DONE {
                break 'poll;
            }
        }
        if handle.is_finished() {
            break 'poll;
        }
    }

    match handle.join().await {
        Ok(store) => {
            bar.finish_with_message("Load complete");
            Ok(store)
        }
        Err(error) => {
            bar.abandon_with_message("Load failed");
            Err(error)
        }
    }
}

/// Print one line per numeric field plus the configured default view order
fn print_summary(store: &TimeSeriesStore, config: &Config) {
    println!();
    println!("{}", "Fields".bold());

    for display_name in store.numeric_display_names() {
        let unit = config.unit_suffix(&display_name).unwrap_or("");
        let count = store.series_len(&display_name);

        let mut line = format!("  {:<14} {:>6} samples", display_name.cyan(), count);
        if let Ok(values) = store.numeric_values(&display_name) {
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            line.push_str(&format!("   range {:.2}{} to {:.2}{}", min, unit, max, unit));
        }
        if let Ok(caps) = store.capabilities(&display_name) {
            if !caps.is_empty() {
                let labels: Vec<&str> = caps.iter().map(Capability::as_str).collect();
                line.push_str(&format!("   [{}]", labels.join(", ").green()));
            }
        }
        println!("{}", line);
    }

    // The caller-facing default order: configured raw names that loaded
    // as numeric fields
    let numeric_raw = store.numeric_raw_names();
    let defaults: Vec<String> = config
        .default_fields
        .iter()
        .filter(|raw| numeric_raw.iter().any(|n| n == *raw))
        .filter_map(|raw| store.display_name(raw).ok().map(str::to_string))
        .collect();
    if !defaults.is_empty() {
        println!();
        println!("{} {}", "Default view:".bold(), defaults.join(", "));
    }
}

/// Print a bucket-averaged view of one field
fn print_average(
    store: &TimeSeriesStore,
    config: &Config,
    display_name: &str,
    bucket_width_seconds: u64,
) -> Result<()> {
    let averaged = store.resampled(display_name, bucket_width_seconds)?;
    let unit = config.unit_suffix(display_name).unwrap_or("");

    println!();
    println!(
        "{}",
        format!(
            "{} averaged over {}s buckets ({} rows)",
            display_name,
            bucket_width_seconds,
            averaged.len()
        )
        .bold()
    );

    for (timestamp, value) in averaged.iter() {
        println!("  {}  {}{}", timestamp, value, unit);
    }

    Ok(())
}

/// Print the windrose table for the wind speed/direction pair
fn print_windrose(store: &TimeSeriesStore, args: &Args) -> Result<()> {
    let capabilities = store.capabilities(DISPLAY_WIND_SPEED)?;
    if !capabilities.contains(&Capability::Windrose) {
        return Err(Error::data_validation(
            "windrose view not available: wind speed and direction series \
             of equal length are required",
        ));
    }

    let options = WindroseOptions {
        sectors: args.sectors,
        magnitude_edges: None,
        normalized: args.normalized,
        blowto: args.blowto,
    };
    let rose = windrose::histogram_for_series(
        store.series(FIELD_DIRECTION)?,
        store.series(DISPLAY_WIND_SPEED)?,
        &options,
    )?;

    println!();
    let mode = if args.normalized { "% of samples" } else { "counts" };
    println!("{}", format!("Windrose ({})", mode).bold());

    // Header row of sector labels
    let mut header = format!("  {:>12}", "speed (m/s)");
    for label in &rose.sector_labels {
        header.push_str(&format!(" {:>6}", label));
    }
    println!("{}", header.dimmed());

    for (row_index, row) in rose.table.iter().enumerate() {
        let edge = rose.magnitude_edges[row_index];
        let label = if row_index + 1 < rose.magnitude_edges.len() {
            format!("{:.1}-{:.1}", edge, rose.magnitude_edges[row_index + 1])
        } else {
            format!(">={:.1}", edge)
        };

        let mut line = format!("  {:>12}", label);
        for cell in row {
            line.push_str(&format!(" {:>6.1}", cell));
        }
        println!("{}", line);
    }

    Ok(())
}
