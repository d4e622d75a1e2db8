//! Calendar grouping: turning the date columns into contiguous row ranges,
//! one per calendar month.
//!
//! Because the table holds exactly one row per day in date order, each
//! calendar month occupies one contiguous run of rows. The month key
//! sequence is therefore non-decreasing, and group boundaries can be found
//! with binary search instead of scanning rows one by one. The segments are
//! computed once and reused by any grouped reduction.

use crate::error::AnalyticsError;
use core_types::WindTable;

/// A contiguous run of table rows covering one calendar month.
///
/// `start..end` is the row range (end exclusive); `key` is the zero-based
/// month index from `ObsDate::month_key`, so January 1961 and January 1962
/// are distinct segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSegment {
    pub key: i64,
    pub start: usize,
    pub end: usize,
}

impl MonthSegment {
    /// Number of observation days in this month.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Computes the month key of every row, rejecting out-of-order input.
///
/// A non-monotonic key sequence means the table is not in date order and
/// every boundary search below it would be meaningless, so it is reported
/// as `UnsortedInput` with the first offending row.
fn month_keys(table: &WindTable) -> Result<Vec<i64>, AnalyticsError> {
    let first_year = table.first_year().ok_or(AnalyticsError::EmptyInput)?;
    let keys: Vec<i64> = table
        .days()
        .iter()
        .map(|obs| obs.date.month_key(first_year))
        .collect();

    if let Some(pos) = keys.windows(2).position(|pair| pair[1] < pair[0]) {
        return Err(AnalyticsError::UnsortedInput { row: pos + 1 });
    }
    Ok(keys)
}

/// Partitions the table into one `MonthSegment` per calendar month present,
/// in chronological order.
///
/// Boundaries are located by `partition_point` over the sorted key
/// sequence — the searchsorted equivalent — rather than by comparing
/// adjacent rows.
pub fn month_segments(table: &WindTable) -> Result<Vec<MonthSegment>, AnalyticsError> {
    let keys = month_keys(table)?;

    let mut segments = Vec::new();
    let mut start = 0;
    while start < keys.len() {
        let key = keys[start];
        let end = start + keys[start..].partition_point(|&k| k <= key);
        segments.push(MonthSegment { key, start, end });
        start = end;
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{DailyObservation, ObsDate, SITE_COUNT, WindTable};

    fn obs(year: u16, month: u8, day: u8) -> DailyObservation {
        DailyObservation {
            date: ObsDate { year, month, day },
            speeds: [1.0; SITE_COUNT],
        }
    }

    #[test]
    fn one_segment_per_calendar_month() {
        let mut days = Vec::new();
        for day in 1..=31 {
            days.push(obs(61, 1, day));
        }
        for day in 1..=28 {
            days.push(obs(61, 2, day));
        }
        let segments = month_segments(&WindTable::new(days)).unwrap();
        assert_eq!(
            segments,
            vec![
                MonthSegment { key: 0, start: 0, end: 31 },
                MonthSegment { key: 1, start: 31, end: 59 },
            ]
        );
    }

    #[test]
    fn januaries_of_different_years_are_distinct_segments() {
        let days = vec![obs(61, 1, 1), obs(61, 1, 2), obs(62, 1, 1), obs(62, 1, 2)];
        let segments = month_segments(&WindTable::new(days)).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].key, 0);
        assert_eq!(segments[1].key, 12);
    }

    #[test]
    fn out_of_order_rows_are_rejected() {
        let days = vec![obs(61, 2, 1), obs(61, 1, 31)];
        assert_eq!(
            month_segments(&WindTable::new(days)),
            Err(AnalyticsError::UnsortedInput { row: 1 })
        );
    }

    #[test]
    fn empty_table_is_empty_input() {
        assert_eq!(
            month_segments(&WindTable::new(Vec::new())),
            Err(AnalyticsError::EmptyInput)
        );
    }
}
