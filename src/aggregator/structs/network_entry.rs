use crate::address::structs::address_key::AddressKey;
use crate::address::structs::network_prefix::NetworkPrefix;
use crate::index::structs::unique_set::UniqueSet;

/// `host_count` always equals `unique_hosts.len()`.
#[derive(Clone, Debug)]
pub struct NetworkEntry {
    pub prefix: NetworkPrefix,
    pub access_count: u64,
    pub unique_hosts: UniqueSet<AddressKey>,
    pub host_count: u64,
}
