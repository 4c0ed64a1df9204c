use crate::address::structs::network_prefix::NetworkPrefix;
use crate::aggregator::structs::network_entry::NetworkEntry;
use crate::index::structs::unique_set::UniqueSet;

impl NetworkEntry {
    pub fn new(prefix: NetworkPrefix) -> NetworkEntry {
        NetworkEntry {
            prefix,
            access_count: 0,
            unique_hosts: UniqueSet::new(),
            host_count: 0,
        }
    }
}
