pub mod network_field;
pub mod host_field;
pub mod stats_event;
