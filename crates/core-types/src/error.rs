use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid calendar date {year:02}-{month:02}-{day:02}")]
    InvalidDate { year: u16, month: u8, day: u8 },

    #[error("dates are not contiguous at row {row}: expected {expected}, found {found}")]
    NonContiguousDate {
        row: usize,
        expected: NaiveDate,
        found: NaiveDate,
    },
}
