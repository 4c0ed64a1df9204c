//! # netlog-aggregator
//!
//! Reads an access log, indexes every record by network prefix and by host in
//! fixed-capacity open-addressing tables, and answers queries over them.
//!
//! ## Overview
//!
//! Each log line names a month, a time of day, an `a.b.c.d[:port]` address
//! and a free-text reason. Records are grouped twice: by the two-octet
//! network prefix `a.b`, which counts accesses and distinct hosts, and by the
//! full address, which keeps every record of that host in file order.
//!
//! Both groupings live in a `HashIndex`: one flat array of slots, sized once
//! at start-up, resolved with linear probing. The table never grows. Running
//! out of slots is a fatal `IndexError::IndexFull`.
//!
//! ## Quick Start
//!
//! ```rust
//! use netlog_aggregator::aggregator::enums::network_field::NetworkField;
//! use netlog_aggregator::aggregator::structs::log_aggregator::LogAggregator;
//!
//! let mut aggregator = LogAggregator::with_capacities(65521, 1000003).unwrap();
//! aggregator.ingest_lines([
//!     "Jun 14 08:09:12 119.232.101.246:6610 Failed password for illegal user root",
//!     "Jun 14 08:09:40 119.232.7.1:6611 Illegal user",
//! ]).unwrap();
//!
//! let busiest = aggregator.query_extreme_networks(NetworkField::AccessCount);
//! assert_eq!(busiest[0].to_string(), "119.232");
//! ```
//!
//! ## Modules
//!
//! - [`address`] - Address keys, network prefixes and numeric ordering
//! - [`index`] - The open-addressing table and its child collections
//! - [`record`] - Log line parsing
//! - [`aggregator`] - Ingestion and queries over both indices
//! - [`report`] - Text and JSON output
//! - [`config`] - Configuration management and TOML parsing
//! - [`common`] - Logging setup and the shared error type
//! - [`structs`] - CLI argument parsing

/// Address keys and network prefixes.
pub mod address;

/// Aggregation engine.
///
/// Owns the network and host indices, ingests records and answers the
/// network, extreme, host and range queries.
pub mod aggregator;

/// Common utilities and shared functionality.
///
/// Contains logging setup and `CustomError`.
pub mod common;

/// Configuration management module.
///
/// Handles loading, saving and validating the TOML configuration.
pub mod config;

/// Fixed-capacity hash index.
pub mod index;

/// Log line parsing.
pub mod record;

/// Query dispatch and output writers.
pub mod report;

/// Command-line interface structures.
pub mod structs;
