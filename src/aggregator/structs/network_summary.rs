use serde::Serialize;
use crate::address::structs::address_key::AddressKey;
use crate::address::structs::network_prefix::NetworkPrefix;

/// Snapshot of one network slot with its hosts in ascending numeric order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkSummary {
    pub prefix: NetworkPrefix,
    pub access_count: u64,
    pub host_count: u64,
    pub sorted_hosts: Vec<AddressKey>,
}
