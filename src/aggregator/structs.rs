/// Owner of both indices.
pub mod log_aggregator;

/// Network slot payload.
pub mod network_entry;

/// Host slot payload.
pub mod host_entry;

/// Result of a network lookup.
pub mod network_summary;

/// Ingestion counters.
pub mod stats;
