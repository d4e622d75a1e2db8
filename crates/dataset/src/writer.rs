use crate::error::DatasetError;
use core_types::{DailyObservation, WindTable};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Serializes a table back into the 15-column data-file format.
///
/// Speeds are written with two decimals, the precision the published files
/// carry, so a load/write/load round trip reproduces a file-loaded table
/// value-for-value. A table built in memory with finer-grained values is
/// rounded to that precision on the way out.
pub fn write_to_string(table: &WindTable) -> String {
    let mut out = String::new();
    for obs in table.days() {
        push_row(&mut out, obs);
    }
    out
}

/// Writes a table to `path` in the data-file format.
pub fn write(path: impl AsRef<Path>, table: &WindTable) -> Result<(), DatasetError> {
    let path = path.as_ref();
    fs::write(path, write_to_string(table)).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn push_row(out: &mut String, obs: &DailyObservation) {
    let date = obs.date;
    // Writing into a String cannot fail.
    let _ = write!(out, "{:2} {:2} {:2}", date.year, date.month, date.day);
    for speed in &obs.speeds {
        let _ = write!(out, " {speed:5.2}");
    }
    out.push('\n');
}
