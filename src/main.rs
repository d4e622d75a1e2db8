use analytics::{StatisticsEngine, Summary};
use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use core_types::WindTable;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// The main entry point for the anemos windspeed statistics tool.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { data, json } => report(&data, json),
        Commands::Summary { data } => summary(&data),
        Commands::Sites { data } => sites(&data),
        Commands::Daily { data } => daily(&data),
        Commands::Peak { data } => peak(&data),
        Commands::January { data } => january(&data),
        Commands::Monthly { data } => monthly(&data),
        Commands::Weekly { data } => weekly(&data),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Descriptive statistics over the Irish daily windspeed dataset.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute every statistic and print them all (or emit JSON).
    Report {
        /// Path to the whitespace-delimited data file.
        data: PathBuf,

        /// Emit the full report as JSON instead of tables.
        #[arg(long)]
        json: bool,
    },
    /// Min/max/mean/std over all sites and days combined.
    Summary { data: PathBuf },
    /// The same four statistics per measurement site.
    Sites { data: PathBuf },
    /// The same four statistics per day, plus the windiest site that day.
    Daily { data: PathBuf },
    /// The date on which the highest windspeed was recorded.
    Peak { data: PathBuf },
    /// Mean per site over every January in the dataset.
    January { data: PathBuf },
    /// Mean windspeed for each calendar month.
    Monthly { data: PathBuf },
    /// Min/max/mean/std per week for the first 52 weeks.
    Weekly { data: PathBuf },
}

// ==============================================================================
// Command Handlers
// ==============================================================================

/// Loads the data file and enforces the contiguous-dates invariant every
/// grouped statistic relies on.
fn load_table(path: &Path) -> anyhow::Result<WindTable> {
    let table =
        dataset::load(path).with_context(|| format!("failed to load {}", path.display()))?;
    table
        .verify_contiguous_dates()
        .context("dataset rows must form one contiguous run of calendar days")?;
    Ok(table)
}

fn report(path: &Path, json: bool) -> anyhow::Result<()> {
    let table = load_table(path)?;
    let report = StatisticsEngine::new().full_report(&table)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Overall ({} days, 12 sites):", table.len());
    print_summaries(std::iter::once(("all readings".to_string(), report.overall)));

    println!("\nPer site:");
    print_site_summaries(&report.per_site);

    println!("\nPeak windspeed recorded on {}", report.peak_wind_date);

    if let Some(means) = report.january_site_means {
        println!("\nJanuary mean per site:");
        print_site_means(&means);
    }

    println!("\nMonthly means:");
    print_monthly(&table, &report.monthly_means)?;

    if let Some(weekly) = &report.weekly {
        println!("\nFirst 52 weeks:");
        print_summaries(
            weekly
                .iter()
                .enumerate()
                .map(|(idx, s)| (format!("week {}", idx + 1), *s)),
        );
    }
    Ok(())
}

fn summary(path: &Path) -> anyhow::Result<()> {
    let table = load_table(path)?;
    let summary = StatisticsEngine::new().overall_summary(&table)?;
    print_summaries(std::iter::once(("all readings".to_string(), summary)));
    Ok(())
}

fn sites(path: &Path) -> anyhow::Result<()> {
    let table = load_table(path)?;
    let summaries = StatisticsEngine::new().site_summaries(&table)?;
    print_site_summaries(&summaries);
    Ok(())
}

fn daily(path: &Path) -> anyhow::Result<()> {
    let table = load_table(path)?;
    let engine = StatisticsEngine::new();
    let summaries = engine.daily_summaries(&table)?;
    let windiest = engine.daily_windiest_site(&table)?;

    let mut out = Table::new();
    out.set_header(vec!["date", "min", "max", "mean", "std", "windiest site"]);
    for ((obs, summary), site) in table.days().iter().zip(&summaries).zip(&windiest) {
        out.add_row(vec![
            obs.date.to_string(),
            format!("{:.2}", summary.min),
            format!("{:.2}", summary.max),
            format!("{:.3}", summary.mean),
            format!("{:.3}", summary.std_dev),
            site.to_string(),
        ]);
    }
    println!("{out}");
    Ok(())
}

fn peak(path: &Path) -> anyhow::Result<()> {
    let table = load_table(path)?;
    let date = StatisticsEngine::new().peak_wind_date(&table)?;
    println!("Peak windspeed recorded on {date}");
    Ok(())
}

fn january(path: &Path) -> anyhow::Result<()> {
    let table = load_table(path)?;
    let means = StatisticsEngine::new().january_site_means(&table)?;
    print_site_means(&means);
    Ok(())
}

fn monthly(path: &Path) -> anyhow::Result<()> {
    let table = load_table(path)?;
    let means = StatisticsEngine::new().monthly_means(&table)?;
    print_monthly(&table, &means)?;
    Ok(())
}

fn weekly(path: &Path) -> anyhow::Result<()> {
    let table = load_table(path)?;
    let weeks = StatisticsEngine::new().weekly_summaries(&table)?;
    print_summaries(
        weeks
            .iter()
            .enumerate()
            .map(|(idx, s)| (format!("week {}", idx + 1), *s)),
    );
    Ok(())
}

// ==============================================================================
// Table Rendering
// ==============================================================================

fn print_summaries(rows: impl Iterator<Item = (String, Summary)>) {
    let mut out = Table::new();
    out.set_header(vec!["", "min", "max", "mean", "std"]);
    for (label, summary) in rows {
        out.add_row(vec![
            label,
            format!("{:.2}", summary.min),
            format!("{:.2}", summary.max),
            format!("{:.3}", summary.mean),
            format!("{:.3}", summary.std_dev),
        ]);
    }
    println!("{out}");
}

fn print_site_summaries(summaries: &[Summary]) {
    print_summaries(
        summaries
            .iter()
            .enumerate()
            .map(|(site, s)| (format!("site {site}"), *s)),
    );
}

fn print_site_means(means: &[f64]) {
    let mut out = Table::new();
    out.set_header(vec!["site", "mean"]);
    for (site, mean) in means.iter().enumerate() {
        out.add_row(vec![site.to_string(), format!("{mean:.3}")]);
    }
    println!("{out}");
}

fn print_monthly(table: &WindTable, means: &[f64]) -> anyhow::Result<()> {
    // Month keys are zero-based from January of the first row's year.
    let first_year = i64::from(table.first_year().unwrap_or_default());
    let segments = analytics::month_segments(table)?;
    let mut out = Table::new();
    out.set_header(vec!["month", "mean"]);
    for (seg, mean) in segments.iter().zip(means) {
        let year = 1900 + first_year + seg.key.div_euclid(12);
        let month = seg.key.rem_euclid(12) + 1;
        out.add_row(vec![format!("{year}-{month:02}"), format!("{mean:.3}")]);
    }
    println!("{out}");
    Ok(())
}
