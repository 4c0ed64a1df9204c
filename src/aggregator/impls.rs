pub mod log_aggregator;
pub mod queries;
pub mod network_entry;
pub mod host_entry;
pub mod network_field;
pub mod host_field;
pub mod stats;
