//! Two-level aggregation of access log records.
//!
//! `LogAggregator` owns a network index keyed by two-octet prefix and a host
//! index keyed by full address. Each network slot counts accesses and keeps
//! the set of distinct hosts seen in it; each host slot keeps its records in
//! file order.
//!
//! # Ingest Order
//!
//! 1. Find or create the host slot and append the record to it.
//! 2. Find or create the network slot of the host's prefix.
//! 3. If the host slot was created in step 1, add the host to the network's
//!    host set and bump its host count.
//! 4. Bump the network's access count.
//!
//! # Example
//!
//! ```rust
//! use netlog_aggregator::aggregator::structs::log_aggregator::LogAggregator;
//!
//! let mut aggregator = LogAggregator::with_capacities(101, 1009).unwrap();
//! aggregator.ingest_lines([
//!     "Jun 1 10:00:00 1.2.3.4:22 Failed password",
//!     "Jun 1 10:00:01 1.2.3.5:22 Failed password",
//!     "Jun 1 10:00:02 1.2.9.9:22 Failed password",
//! ]).unwrap();
//!
//! let summary = aggregator.query_network("1.2").unwrap();
//! assert_eq!(summary.access_count, 3);
//! assert_eq!(summary.host_count, 3);
//! assert!(aggregator.query_network("9.9").is_none());
//! ```

/// Query field selectors and statistics events.
pub mod enums;

/// The aggregator, its slot payloads and query results.
pub mod structs;

/// Ingestion, queries and statistics.
pub mod impls;
