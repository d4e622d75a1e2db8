use core_types::{ObsDate, SITE_COUNT};
use serde::{Deserialize, Serialize};

/// The four descriptive statistics every reduction in this crate produces.
///
/// `std_dev` is the population standard deviation,
/// `sqrt(mean((x - mean(x))^2))`, matching how the dataset has historically
/// been analyzed — not the sample (n-1) estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl Summary {
    /// Computes all four statistics over a slice of readings.
    ///
    /// Returns `None` for an empty slice; callers map that onto the error
    /// appropriate for their grouping.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &v in values {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }
        let mean = sum / n;

        let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;

        Some(Self {
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

/// Every statistic the engine knows how to compute, bundled into one
/// serializable result. This is the payload behind the CLI's JSON output.
///
/// The calendar-dependent entries are `Option`s: a table with no January
/// rows or with fewer than 52 full weeks still yields the unconditional
/// statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetReport {
    /// One set of statistics over all sites and all days combined.
    pub overall: Summary,
    /// One entry per site (length 12), in column order.
    pub per_site: Vec<Summary>,
    /// One entry per observation day (length N), in row order.
    pub per_day: Vec<Summary>,
    /// Zero-based index of the windiest site for each day (length N).
    pub daily_windiest_site: Vec<usize>,
    /// Date of the single highest reading in the whole table.
    pub peak_wind_date: ObsDate,
    /// Mean per site over every January row of every year, pooled.
    pub january_site_means: Option<[f64; SITE_COUNT]>,
    /// Mean over all readings of each calendar month, chronological.
    pub monthly_means: Vec<f64>,
    /// One entry per week for the first 52 weeks of the table.
    pub weekly: Option<Vec<Summary>>,
}
