use crate::error::DatasetError;
use core_types::{DailyObservation, FIELDS_PER_ROW, ObsDate, SITE_COUNT, WindTable};
use std::fs;
use std::path::Path;
use tracing::info;

/// Loads a windspeed data file into a `WindTable`.
///
/// # Returns
///
/// The parsed table, or `DatasetError::Io` if the file cannot be read,
/// `DatasetError::MalformedRow` if any line does not hold exactly 15
/// numeric fields, and `DatasetError::InvalidDate` if a row's date columns
/// name no real calendar day.
pub fn load(path: impl AsRef<Path>) -> Result<WindTable, DatasetError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_str(&text)?;
    info!(path = %path.display(), rows = table.len(), "loaded windspeed table");
    Ok(table)
}

/// Parses the data-file format from an in-memory string.
///
/// Blank lines are skipped; every other line must be a complete 15-field
/// observation row. Line numbers in errors are 1-based.
pub fn parse_str(text: &str) -> Result<WindTable, DatasetError> {
    let mut days = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        days.push(parse_row(line, idx + 1)?);
    }
    Ok(WindTable::new(days))
}

fn parse_row(line: &str, line_no: usize) -> Result<DailyObservation, DatasetError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != FIELDS_PER_ROW {
        return Err(DatasetError::MalformedRow {
            line: line_no,
            reason: format!("expected {FIELDS_PER_ROW} fields, found {}", fields.len()),
        });
    }

    let date = ObsDate {
        year: parse_field(fields[0], 1, line_no)?,
        month: parse_field(fields[1], 2, line_no)?,
        day: parse_field(fields[2], 3, line_no)?,
    };
    // Reject rows whose date columns name no real calendar day; grouped
    // statistics downstream assume every row maps to one.
    date.to_naive_date()
        .map_err(|source| DatasetError::InvalidDate { line: line_no, source })?;

    let mut speeds = [0.0; SITE_COUNT];
    for (site, speed) in speeds.iter_mut().enumerate() {
        *speed = parse_field(fields[3 + site], 4 + site, line_no)?;
    }

    Ok(DailyObservation { date, speeds })
}

fn parse_field<T: std::str::FromStr>(
    raw: &str,
    field: usize,
    line_no: usize,
) -> Result<T, DatasetError> {
    raw.parse().map_err(|_| DatasetError::MalformedRow {
        line: line_no,
        reason: format!("field {field} is not numeric: '{raw}'"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
61  1  1 15.04 14.96 13.17  9.29 13.96  9.87 13.67 10.25 10.83 12.58 18.50 15.04
61  1  2 14.71 16.88 10.83  6.50 12.62  7.67 11.50 10.04  9.79  9.67 17.54 13.83
61  1  3 18.50 16.88 12.33 10.13 11.17  6.17 11.25  8.04  8.50  7.67 12.75 12.71
";

    #[test]
    fn parses_well_formed_rows() {
        let table = parse_str(SAMPLE).unwrap();
        assert_eq!(table.len(), 3);
        let first = &table.days()[0];
        assert_eq!(first.date, ObsDate { year: 61, month: 1, day: 1 });
        assert_eq!(first.speeds[0], 15.04);
        assert_eq!(first.speeds[10], 18.50);
        assert_eq!(table.days()[2].speeds[11], 12.71);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let text = format!("\n{SAMPLE}\n\n");
        assert_eq!(parse_str(&text).unwrap().len(), 3);
    }

    #[test]
    fn short_row_is_malformed() {
        let err = parse_str("61 1 1 15.04\n").unwrap_err();
        match err {
            DatasetError::MalformedRow { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("found 4"), "{reason}");
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn extra_field_is_malformed() {
        let line = SAMPLE.lines().next().unwrap();
        let err = parse_str(&format!("{line} 1.00\n")).unwrap_err();
        assert!(matches!(err, DatasetError::MalformedRow { line: 1, .. }));
    }

    #[test]
    fn non_numeric_field_is_malformed_with_line_number() {
        let text = "61  1  1 15.04 14.96 13.17  9.29 13.96  9.87 13.67 10.25 10.83 12.58 18.50 15.04\n\
                    61  1  x 14.71 16.88 10.83  6.50 12.62  7.67 11.50 10.04  9.79  9.67 17.54 13.83\n";
        let err = parse_str(text).unwrap_err();
        match err {
            DatasetError::MalformedRow { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("'x'"), "{reason}");
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn impossible_calendar_date_is_rejected() {
        let text = "61 13 45 15.04 14.96 13.17  9.29 13.96  9.87 13.67 10.25 10.83 12.58 18.50 15.04\n";
        let err = parse_str(text).unwrap_err();
        match err {
            DatasetError::InvalidDate { line, source } => {
                assert_eq!(line, 1);
                assert_eq!(
                    source,
                    core_types::CoreError::InvalidDate { year: 61, month: 13, day: 45 }
                );
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn february_30th_is_rejected() {
        let text = "61  2 30 15.04 14.96 13.17  9.29 13.96  9.87 13.67 10.25 10.83 12.58 18.50 15.04\n";
        assert!(matches!(
            parse_str(text).unwrap_err(),
            DatasetError::InvalidDate { line: 1, .. }
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load("/nonexistent/wind.data").unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
