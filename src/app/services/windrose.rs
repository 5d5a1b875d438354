//! Windrose histogram engine
//!
//! Bins paired (direction, magnitude) samples into a sector-by-magnitude
//! table for rose and plain-histogram display. Sectors are centered on the
//! compass points: sector boundaries sit half a sector width either side
//! of each center, so sector 0 spans the wrap at 0/360 degrees. After
//! binning, the overflow column above 360 is folded back into sector 0 so
//! North winds aggregate correctly.

use crate::app::models::TimeSeries;
use crate::constants::{COMPASS_POINTS_16, DEFAULT_MAGNITUDE_EDGE_COUNT, DEFAULT_SECTOR_COUNT};
use crate::{Error, Result};

/// Binning options for a windrose or histogram table
#[derive(Debug, Clone)]
pub struct WindroseOptions {
    /// Number of direction sectors
    pub sectors: usize,

    /// Magnitude bin edges, ascending. When absent, edges are spread
    /// linearly between the observed minimum and maximum magnitude.
    /// The final bin is always open-ended above the last edge.
    pub magnitude_edges: Option<Vec<f64>>,

    /// Rescale the table so all cells sum to 100
    pub normalized: bool,

    /// Rotate directions 180 degrees: show where the wind blows to
    /// instead of where it blows from
    pub blowto: bool,
}

impl Default for WindroseOptions {
    fn default() -> Self {
        Self {
            sectors: DEFAULT_SECTOR_COUNT,
            magnitude_edges: None,
            normalized: false,
            blowto: false,
        }
    }
}

/// Computed windrose table plus everything a caller needs to render it
#[derive(Debug, Clone, PartialEq)]
pub struct WindroseTable {
    /// Row-major counts (or percentages): rows = magnitude bins, columns =
    /// direction sectors. The last row is the open-ended top magnitude bin.
    pub table: Vec<Vec<f64>>,

    /// Resolved finite magnitude bin edges, ascending
    pub magnitude_edges: Vec<f64>,

    /// Sector center bearings in degrees, clockwise from North
    pub sector_centers: Vec<f64>,

    /// Sector labels (compass points for the 16-sector default)
    pub sector_labels: Vec<String>,
}

impl WindroseTable {
    /// Number of magnitude bins (rows)
    pub fn bin_count(&self) -> usize {
        self.table.len()
    }

    /// Number of direction sectors (columns)
    pub fn sector_count(&self) -> usize {
        self.sector_centers.len()
    }

    /// Sum over every cell of the table
    pub fn total(&self) -> f64 {
        self.table.iter().flatten().sum()
    }

    /// Per-sector totals summed across magnitude bins
    pub fn sector_totals(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.sector_count()];
        for row in &self.table {
            for (sector, value) in row.iter().enumerate() {
                totals[sector] += value;
            }
        }
        totals
    }
}

/// Bin paired direction/magnitude samples into a windrose table.
///
/// `directions` are bearings in degrees, North referenced, in [0, 360].
/// `magnitudes` must have exactly the same length; a mismatch is a hard
/// error, never a silent truncation. Samples with a non-finite component
/// or a magnitude below the lowest bin edge are ignored.
pub fn histogram(
    directions: &[f64],
    magnitudes: &[f64],
    options: &WindroseOptions,
) -> Result<WindroseTable> {
    if directions.len() != magnitudes.len() {
        return Err(Error::data_validation(format!(
            "direction count {} does not match magnitude count {}",
            directions.len(),
            magnitudes.len()
        )));
    }
    if directions.is_empty() {
        return Err(Error::data_validation(
            "windrose needs at least one sample",
        ));
    }
    if options.sectors == 0 {
        return Err(Error::data_validation(
            "windrose needs at least one sector",
        ));
    }

    let magnitude_edges = resolve_magnitude_edges(magnitudes, options.magnitude_edges.as_deref())?;
    let sectors = options.sectors;
    let sector_width = 360.0 / sectors as f64;
    let half_sector = sector_width / 2.0;

    // One extra column for the split upper half of sector 0, folded back
    // into column 0 after binning
    let mut table = vec![vec![0.0f64; sectors + 1]; magnitude_edges.len()];

    for (&raw_direction, &magnitude) in directions.iter().zip(magnitudes.iter()) {
        if !raw_direction.is_finite() || !magnitude.is_finite() {
            continue;
        }

        let mut direction = raw_direction;
        if options.blowto {
            direction += 180.0;
            if direction >= 360.0 {
                direction -= 360.0;
            }
        }

        let Some(row) = magnitude_bin(&magnitude_edges, magnitude) else {
            continue;
        };
        let Some(column) = direction_bin(direction, half_sector, sector_width, sectors) else {
            continue;
        };

        table[row][column] += 1.0;
    }

    // Fold the wraparound column into sector 0 and drop it
    for row in table.iter_mut() {
        row[0] += row[sectors];
        row.truncate(sectors);
    }

    if options.normalized {
        let total: f64 = table.iter().flatten().sum();
        if total > 0.0 {
            for cell in table.iter_mut().flatten() {
                *cell = *cell * 100.0 / total;
            }
        }
    }

    let sector_centers: Vec<f64> = (0..sectors).map(|i| i as f64 * sector_width).collect();
    let sector_labels = sector_labels(&sector_centers);

    Ok(WindroseTable {
        table,
        magnitude_edges,
        sector_centers,
        sector_labels,
    })
}

/// Bin paired speed/direction series by position.
///
/// Convenience wrapper for store consumers: both series must be fully
/// numeric and of equal length.
pub fn histogram_for_series(
    direction_series: &TimeSeries,
    magnitude_series: &TimeSeries,
    options: &WindroseOptions,
) -> Result<WindroseTable> {
    let directions = numeric_or_error(direction_series, "direction")?;
    let magnitudes = numeric_or_error(magnitude_series, "magnitude")?;
    histogram(&directions, &magnitudes, options)
}

fn numeric_or_error(series: &TimeSeries, role: &str) -> Result<Vec<f64>> {
    series.numeric_values().ok_or_else(|| {
        Error::data_validation(format!("{} series holds non-numeric samples", role))
    })
}

fn resolve_magnitude_edges(magnitudes: &[f64], provided: Option<&[f64]>) -> Result<Vec<f64>> {
    match provided {
        Some(edges) => {
            if edges.len() < 2 {
                return Err(Error::data_validation(
                    "magnitude edges need at least two values",
                ));
            }
            if edges.windows(2).any(|pair| pair[1] <= pair[0]) {
                return Err(Error::data_validation(
                    "magnitude edges must be strictly ascending",
                ));
            }
            Ok(edges.to_vec())
        }
        None => {
            let min = magnitudes.iter().copied().fold(f64::INFINITY, f64::min);
            let max = magnitudes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            if !min.is_finite() || !max.is_finite() {
                return Err(Error::data_validation(
                    "cannot derive magnitude edges from non-finite samples",
                ));
            }
            let count = DEFAULT_MAGNITUDE_EDGE_COUNT;
            let step = (max - min) / (count - 1) as f64;
            Ok((0..count).map(|i| min + step * i as f64).collect())
        }
    }
}

/// Row index for a magnitude: bin i spans [edge[i], edge[i+1]), the last
/// bin is open-ended. Magnitudes below the first edge have no bin.
fn magnitude_bin(edges: &[f64], magnitude: f64) -> Option<usize> {
    if magnitude < edges[0] {
        return None;
    }
    let below_or_equal = edges.iter().take_while(|&&edge| magnitude >= edge).count();
    Some((below_or_equal - 1).min(edges.len() - 1))
}

/// Column index for a direction against the offset sector edges
/// [0, w/2, 3w/2, ..., 360 + w/2]. Column `sectors` is the overflow half
/// of sector 0, folded back by the caller.
fn direction_bin(
    direction: f64,
    half_sector: f64,
    sector_width: f64,
    sectors: usize,
) -> Option<usize> {
    if direction < 0.0 {
        return None;
    }
    let column = if direction < half_sector {
        0
    } else {
        1 + ((direction - half_sector) / sector_width) as usize
    };
    if column > sectors {
        return None;
    }
    Some(column)
}

fn sector_labels(sector_centers: &[f64]) -> Vec<String> {
    if sector_centers.len() == COMPASS_POINTS_16.len() {
        COMPASS_POINTS_16.iter().map(|s| s.to_string()).collect()
    } else {
        sector_centers
            .iter()
            .map(|center| format!("{:.0}\u{b0}", center))
            .collect()
    }
}
