//! # Anemos Core Types
//!
//! The shared domain model for the windspeed analysis workspace. This is a
//! Layer 0 crate: it defines the observation table and its invariants and
//! has no knowledge of file formats, statistics, or presentation.
//!
//! ## Public API
//!
//! - `WindTable`: the immutable, date-ordered table of daily observations.
//! - `DailyObservation` / `ObsDate`: one row of the table and its date.
//! - `CoreError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod table;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use table::{DailyObservation, FIELDS_PER_ROW, ObsDate, SITE_COUNT, WindTable};
