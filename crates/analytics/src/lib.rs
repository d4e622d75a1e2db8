//! # Anemos Analytics Engine
//!
//! Descriptive statistics over the loaded windspeed table: whole-dataset,
//! per-site, per-day, per-calendar-month and per-week reductions, plus the
//! extremum searches (windiest site per day, date of the overall peak).
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   file formats or presentation. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `StatisticsEngine` is a stateless
//!   calculator. It takes an immutable `WindTable` as input and produces
//!   scalars, vectors or a `DatasetReport` as output. This makes it highly
//!   reliable and easy to test.
//!
//! ## Public API
//!
//! - `StatisticsEngine`: the main struct that contains the calculation logic.
//! - `Summary` / `DatasetReport`: the standardized result structs.
//! - `MonthSegment`: a contiguous row range covering one calendar month.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod calendar;
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use calendar::{MonthSegment, month_segments};
pub use engine::{DAYS_PER_WEEK, StatisticsEngine, WEEKS};
pub use error::AnalyticsError;
pub use report::{DatasetReport, Summary};
