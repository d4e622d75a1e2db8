//! End-to-end checks over the committed sample file: load, validate,
//! compute, and round-trip through the writer.

use analytics::StatisticsEngine;
use core_types::{ObsDate, SITE_COUNT, WindTable};
use std::path::PathBuf;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/wind_sample.data")
}

fn load_sample() -> WindTable {
    let table = dataset::load(sample_path()).expect("sample file should parse");
    table
        .verify_contiguous_dates()
        .expect("sample file should be contiguous");
    table
}

#[test]
fn sample_file_produces_the_known_statistics() {
    let table = load_sample();
    let engine = StatisticsEngine::new();

    let overall = engine.overall_summary(&table).unwrap();
    assert_eq!(overall.min, 6.17);
    assert_eq!(overall.max, 18.50);
    assert!((overall.mean - 12.07888888888889).abs() < 1e-9);

    let daily = engine.daily_summaries(&table).unwrap();
    let maxima: Vec<f64> = daily.iter().map(|s| s.max).collect();
    assert_eq!(maxima, vec![18.50, 17.54, 18.50]);

    assert_eq!(engine.daily_windiest_site(&table).unwrap(), vec![10, 10, 0]);
    assert_eq!(
        engine.peak_wind_date(&table).unwrap(),
        ObsDate { year: 61, month: 1, day: 1 }
    );
}

#[test]
fn sample_file_report_serializes_to_json() {
    let table = load_sample();
    let report = StatisticsEngine::new().full_report(&table).unwrap();
    assert_eq!(report.per_site.len(), SITE_COUNT);
    assert!(report.weekly.is_none());

    let json = serde_json::to_string(&report).unwrap();
    let parsed: analytics::DatasetReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn sample_file_survives_a_write_read_round_trip() {
    let table = load_sample();
    let rewritten = dataset::write_to_string(&table);
    let reloaded = dataset::parse_str(&rewritten).unwrap();
    assert_eq!(reloaded, table);
}
