//! Writers that turn query results into the program's output.
//!
//! Text output is line oriented, one value per line, with blank lines
//! separating result groups. JSON output carries the same values through
//! `serde_json`.

/// Output format and query mode selectors.
pub mod enums;

/// Query dispatch and the writers.
#[allow(clippy::module_inception)]
pub mod report;

/// Unit tests for the writers.
pub mod tests;
