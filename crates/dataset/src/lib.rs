//! # Anemos Dataset I/O
//!
//! Reads and writes the fixed 15-column windspeed data file: plain text,
//! whitespace-separated, one observation day per line — year, month and day
//! followed by twelve site readings in knots. No header row.
//!
//! This is the only crate that touches the filesystem. It validates each
//! row in isolation (field count, numeric fields, and a real calendar
//! date) but not cross-row contiguity; that invariant belongs to
//! `core-types` and is checked by the caller.
//!
//! ## Public API
//!
//! - `load` / `parse_str`: file or string into a `WindTable`.
//! - `write` / `write_to_string`: a `WindTable` back into the same format,
//!   so that a load/write/load round trip reproduces the table exactly.
//! - `DatasetError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod loader;
pub mod writer;

// Re-export the key components to create a clean, public-facing API.
pub use error::DatasetError;
pub use loader::{load, parse_str};
pub use writer::{write, write_to_string};
