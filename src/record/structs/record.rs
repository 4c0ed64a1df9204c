use serde::Serialize;
use crate::address::structs::address_key::AddressKey;
use crate::address::structs::network_prefix::NetworkPrefix;
use crate::record::structs::timestamp::Timestamp;

#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
pub struct Record {
    pub network: NetworkPrefix,
    pub host: AddressKey,
    pub timestamp: Timestamp,
    pub port: u16,
    pub reason: String,
    pub original_line: String,
}
