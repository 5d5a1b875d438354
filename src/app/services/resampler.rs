//! Time-bucket averaging of a series
//!
//! Produces a coarser view of a series by averaging all samples falling in
//! fixed-width, non-overlapping buckets. Buckets are aligned to integer
//! multiples of the bucket width from the Unix epoch; each output sample
//! is re-indexed to its bucket's temporal midpoint so averaged plots do
//! not show a staircase offset. Empty buckets produce no output entry.

use std::collections::BTreeMap;

use crate::app::models::{TimeSeries, Value};
use crate::{Error, Result};

/// Average a series over fixed-width time buckets.
///
/// `bucket_width_seconds` must be greater than zero. Text cells carry no
/// numeric reading and do not contribute to bucket means. The result is a
/// new series; the input is untouched.
pub fn resample_mean(series: &TimeSeries, bucket_width_seconds: u64) -> Result<TimeSeries> {
    if bucket_width_seconds == 0 {
        return Err(Error::data_validation(
            "bucket width must be greater than zero seconds",
        ));
    }

    let width = bucket_width_seconds as i64;

    // Keyed by bucket ordinal; BTreeMap keeps the output time-ordered
    let mut buckets: BTreeMap<i64, (f64, usize)> = BTreeMap::new();

    for (timestamp, value) in series.iter() {
        let Some(number) = value.as_number() else {
            continue;
        };
        let bucket = timestamp.and_utc().timestamp().div_euclid(width);
        let entry = buckets.entry(bucket).or_insert((0.0, 0));
        entry.0 += number;
        entry.1 += 1;
    }

    let mut samples = Vec::with_capacity(buckets.len());
    for (bucket, (sum, count)) in buckets {
        let midpoint_millis = bucket * width * 1000 + width * 500;
        let timestamp = chrono::DateTime::from_timestamp_millis(midpoint_millis)
            .ok_or_else(|| Error::data_validation("bucket midpoint outside representable time"))?
            .naive_utc();
        samples.push((timestamp, Value::Number(sum / count as f64)));
    }

    Ok(TimeSeries::from_samples(samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2015, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn series(samples: Vec<(NaiveDateTime, f64)>) -> TimeSeries {
        TimeSeries::from_samples(
            samples
                .into_iter()
                .map(|(ts, v)| (ts, Value::Number(v)))
                .collect(),
        )
    }

    #[test]
    fn test_zero_width_rejected() {
        let input = series(vec![(at(10, 0, 0), 1.0)]);
        assert!(resample_mean(&input, 0).is_err());
    }

    #[test]
    fn test_bucket_means() {
        // Two samples in 10:00 minute, one in 10:02; minute-wide buckets
        let input = series(vec![
            (at(10, 0, 10), 2.0),
            (at(10, 0, 50), 4.0),
            (at(10, 2, 30), 9.0),
        ]);

        let resampled = resample_mean(&input, 60).unwrap();

        assert_eq!(resampled.len(), 2);
        assert_eq!(resampled.values()[0], Value::Number(3.0));
        assert_eq!(resampled.values()[1], Value::Number(9.0));
    }

    #[test]
    fn test_midpoint_timestamps() {
        let input = series(vec![(at(10, 0, 10), 2.0), (at(10, 2, 30), 9.0)]);
        let resampled = resample_mean(&input, 60).unwrap();

        assert_eq!(resampled.timestamps()[0], at(10, 0, 30));
        assert_eq!(resampled.timestamps()[1], at(10, 2, 30));
    }

    #[test]
    fn test_empty_buckets_produce_no_entries() {
        // A three-hour gap between samples must not emit interpolated rows
        let input = series(vec![(at(9, 0, 30), 1.0), (at(12, 0, 30), 5.0)]);
        let resampled = resample_mean(&input, 60).unwrap();

        assert_eq!(resampled.len(), 2);
    }

    #[test]
    fn test_idempotent_on_aligned_single_sample_buckets() {
        // One sample exactly at each bucket start: values unchanged,
        // timestamps re-indexed to bucket midpoints
        let input = series(vec![
            (at(10, 0, 0), 1.5),
            (at(10, 10, 0), 2.5),
            (at(10, 20, 0), 3.5),
        ]);

        let resampled = resample_mean(&input, 600).unwrap();

        assert_eq!(
            resampled.values(),
            &[
                Value::Number(1.5),
                Value::Number(2.5),
                Value::Number(3.5)
            ]
        );
        assert_eq!(
            resampled.timestamps(),
            &[at(10, 5, 0), at(10, 15, 0), at(10, 25, 0)]
        );
    }

    #[test]
    fn test_text_cells_do_not_contribute() {
        let input = TimeSeries::from_samples(vec![
            (at(10, 0, 10), Value::Number(2.0)),
            (at(10, 0, 20), Value::Text("fault".to_string())),
            (at(10, 0, 50), Value::Number(4.0)),
        ]);

        let resampled = resample_mean(&input, 60).unwrap();

        assert_eq!(resampled.len(), 1);
        assert_eq!(resampled.values()[0], Value::Number(3.0));
    }

    #[test]
    fn test_source_series_untouched() {
        let input = series(vec![(at(10, 0, 10), 2.0), (at(10, 0, 50), 4.0)]);
        let before = input.clone();
        let _ = resample_mean(&input, 60).unwrap();
        assert_eq!(input, before);
    }
}
