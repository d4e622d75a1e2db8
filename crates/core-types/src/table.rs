use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of measurement sites in the dataset (one windspeed column each).
pub const SITE_COUNT: usize = 12;

/// Fields per data-file row: year, month, day, then one reading per site.
pub const FIELDS_PER_ROW: usize = SITE_COUNT + 3;

/// The date of one observation row, exactly as stored in the data file.
///
/// `year` is the raw two-digit value (61 = 1961); the dataset spans
/// 1961-1978, so resolution to a real calendar year is always 1900-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObsDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl ObsDate {
    /// Resolves the stored two-digit year into a real `NaiveDate`.
    pub fn to_naive_date(self) -> Result<NaiveDate, CoreError> {
        NaiveDate::from_ymd_opt(
            1900 + i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
        .ok_or(CoreError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
        })
    }

    /// Zero-based sequential index of this date's calendar month, counted
    /// from January of `first_year`. January 1961 and January 1962 map to
    /// different keys, which is what makes multi-year grouping work.
    pub fn month_key(self, first_year: u16) -> i64 {
        (i64::from(self.year) - i64::from(first_year)) * 12 + (i64::from(self.month) - 1)
    }
}

impl std::fmt::Display for ObsDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}-{:02}", 1900 + u32::from(self.year), self.month, self.day)
    }
}

/// One row of the table: a date and the readings of all 12 sites that day,
/// in column order. Readings are average windspeeds in knots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    pub date: ObsDate,
    pub speeds: [f64; SITE_COUNT],
}

/// The loaded dataset: one `DailyObservation` per calendar day, in date
/// order. The table is immutable once constructed; every statistic is a
/// read-only reduction over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindTable {
    days: Vec<DailyObservation>,
}

impl WindTable {
    pub fn new(days: Vec<DailyObservation>) -> Self {
        Self { days }
    }

    /// Number of observation days (rows).
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// All rows, in date order.
    pub fn days(&self) -> &[DailyObservation] {
        &self.days
    }

    /// Two-digit year of the first row, the origin for month keys.
    pub fn first_year(&self) -> Option<u16> {
        self.days.first().map(|d| d.date.year)
    }

    /// Checks the dataset invariant: rows form one contiguous run of
    /// calendar days with no gaps or duplicates. Grouping arithmetic
    /// (month segments, week slicing) is only meaningful when this holds.
    pub fn verify_contiguous_dates(&self) -> Result<(), CoreError> {
        let mut expected: Option<NaiveDate> = None;
        for (row, obs) in self.days.iter().enumerate() {
            let found = obs.date.to_naive_date()?;
            if let Some(expected) = expected {
                if found != expected {
                    return Err(CoreError::NonContiguousDate {
                        row,
                        expected,
                        found,
                    });
                }
            }
            expected = found.succ_opt();
        }
        Ok(())
    }
}
