use crate::calendar;
use crate::error::AnalyticsError;
use crate::report::{DatasetReport, Summary};
use core_types::{ObsDate, SITE_COUNT, WindTable};
use tracing::debug;

/// Weeks covered by the weekly reduction.
pub const WEEKS: usize = 52;

/// Days per week group. Week 1 starts on the table's first row; this is
/// plain 7-day slicing from the start of the data, not ISO weeks.
pub const DAYS_PER_WEEK: usize = 7;

/// A stateless calculator for descriptive statistics over a `WindTable`.
#[derive(Debug, Default)]
pub struct StatisticsEngine {}

impl StatisticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Min, max, mean and standard deviation over all sites and all days
    /// combined — a single set of numbers for the entire dataset.
    pub fn overall_summary(&self, table: &WindTable) -> Result<Summary, AnalyticsError> {
        let values: Vec<f64> = table
            .days()
            .iter()
            .flat_map(|obs| obs.speeds.iter().copied())
            .collect();
        Summary::compute(&values).ok_or(AnalyticsError::EmptyInput)
    }

    /// The same four statistics per site, reduced over all days. The
    /// result has length 12 and follows column order.
    pub fn site_summaries(&self, table: &WindTable) -> Result<Vec<Summary>, AnalyticsError> {
        if table.is_empty() {
            return Err(AnalyticsError::EmptyInput);
        }
        let mut summaries = Vec::with_capacity(SITE_COUNT);
        for site in 0..SITE_COUNT {
            let column: Vec<f64> = table.days().iter().map(|obs| obs.speeds[site]).collect();
            // Non-empty by the check above.
            summaries.push(Summary::compute(&column).ok_or(AnalyticsError::EmptyInput)?);
        }
        Ok(summaries)
    }

    /// The same four statistics per day, reduced across the 12 sites. The
    /// result has one entry per table row, in row order.
    pub fn daily_summaries(&self, table: &WindTable) -> Result<Vec<Summary>, AnalyticsError> {
        if table.is_empty() {
            return Err(AnalyticsError::EmptyInput);
        }
        table
            .days()
            .iter()
            .map(|obs| Summary::compute(&obs.speeds).ok_or(AnalyticsError::EmptyInput))
            .collect()
    }

    /// For each day, the zero-based index of the site with the highest
    /// reading. Ties go to the lowest index.
    pub fn daily_windiest_site(&self, table: &WindTable) -> Result<Vec<usize>, AnalyticsError> {
        if table.is_empty() {
            return Err(AnalyticsError::EmptyInput);
        }
        Ok(table
            .days()
            .iter()
            .map(|obs| argmax_first(&obs.speeds))
            .collect())
    }

    /// The date on which the single highest reading anywhere in the table
    /// was recorded.
    ///
    /// The scan is row-major with a strict comparison, so when several
    /// readings share the maximum the earliest day wins, and within a day
    /// the lowest site index.
    pub fn peak_wind_date(&self, table: &WindTable) -> Result<ObsDate, AnalyticsError> {
        let mut best: Option<(f64, ObsDate)> = None;
        for obs in table.days() {
            for &speed in &obs.speeds {
                match best {
                    Some((peak, _)) if speed <= peak => {}
                    _ => best = Some((speed, obs.date)),
                }
            }
        }
        best.map(|(_, date)| date).ok_or(AnalyticsError::EmptyInput)
    }

    /// Mean reading per site over every row with `month == 1`, all years
    /// pooled together — January 1961 and January 1962 land in the same
    /// pool. The result has length 12 in column order.
    pub fn january_site_means(
        &self,
        table: &WindTable,
    ) -> Result<[f64; SITE_COUNT], AnalyticsError> {
        if table.is_empty() {
            return Err(AnalyticsError::EmptyInput);
        }
        let mut sums = [0.0; SITE_COUNT];
        let mut rows = 0usize;
        for obs in table.days().iter().filter(|obs| obs.date.month == 1) {
            for (sum, speed) in sums.iter_mut().zip(&obs.speeds) {
                *sum += speed;
            }
            rows += 1;
        }
        if rows == 0 {
            return Err(AnalyticsError::EmptyGroup("January".to_string()));
        }
        for sum in &mut sums {
            *sum /= rows as f64;
        }
        Ok(sums)
    }

    /// Mean over all readings of each calendar month present, in
    /// chronological order — one scalar per month, all sites and days of
    /// that month flattened together.
    ///
    /// Grouping reuses the `MonthSegment` ranges from `calendar`, so each
    /// month is a segmented sum normalized by `days_in_month * 12`.
    pub fn monthly_means(&self, table: &WindTable) -> Result<Vec<f64>, AnalyticsError> {
        let segments = calendar::month_segments(table)?;
        debug!(months = segments.len(), "computed month segments");
        Ok(segments
            .iter()
            .map(|seg| {
                let sum: f64 = table.days()[seg.start..seg.end]
                    .iter()
                    .flat_map(|obs| obs.speeds.iter())
                    .sum();
                sum / (seg.len() * SITE_COUNT) as f64
            })
            .collect())
    }

    /// Min, max, mean and standard deviation per week for the first 52
    /// weeks, each over the 84 readings of its 7 days.
    pub fn weekly_summaries(&self, table: &WindTable) -> Result<Vec<Summary>, AnalyticsError> {
        let required = WEEKS * DAYS_PER_WEEK;
        if table.len() < required {
            return Err(AnalyticsError::InsufficientData {
                required,
                actual: table.len(),
            });
        }
        table.days()[..required]
            .chunks(DAYS_PER_WEEK)
            .map(|week| {
                let values: Vec<f64> = week
                    .iter()
                    .flat_map(|obs| obs.speeds.iter().copied())
                    .collect();
                Summary::compute(&values).ok_or(AnalyticsError::EmptyInput)
            })
            .collect()
    }

    /// Runs every statistic and bundles the results.
    ///
    /// The January and weekly entries degrade to `None` when the table has
    /// no January rows or fewer than 52 full weeks; any other failure is
    /// surfaced as-is.
    pub fn full_report(&self, table: &WindTable) -> Result<DatasetReport, AnalyticsError> {
        let january_site_means = match self.january_site_means(table) {
            Ok(means) => Some(means),
            Err(AnalyticsError::EmptyGroup(_)) => None,
            Err(err) => return Err(err),
        };
        let weekly = match self.weekly_summaries(table) {
            Ok(weeks) => Some(weeks),
            Err(AnalyticsError::InsufficientData { .. }) => None,
            Err(err) => return Err(err),
        };

        Ok(DatasetReport {
            overall: self.overall_summary(table)?,
            per_site: self.site_summaries(table)?,
            per_day: self.daily_summaries(table)?,
            daily_windiest_site: self.daily_windiest_site(table)?,
            peak_wind_date: self.peak_wind_date(table)?,
            january_site_means,
            monthly_means: self.monthly_means(table)?,
            weekly,
        })
    }
}

/// Index of the largest value; the first occurrence wins on ties, which is
/// a guarantee several iterator-based max utilities do not give.
fn argmax_first(values: &[f64]) -> usize {
    let mut best = 0;
    for (idx, &value) in values.iter().enumerate().skip(1) {
        if value > values[best] {
            best = idx;
        }
    }
    best
}
