use std::sync::Arc;
use crate::aggregator::structs::host_entry::HostEntry;
use crate::aggregator::structs::network_entry::NetworkEntry;
use crate::aggregator::structs::stats::Stats;
use crate::config::structs::configuration::Configuration;
use crate::index::structs::hash_index::HashIndex;

#[derive(Debug)]
pub struct LogAggregator {
    pub config: Arc<Configuration>,
    pub networks: HashIndex<NetworkEntry>,
    pub hosts: HashIndex<HostEntry>,
    pub stats: Stats,
}
