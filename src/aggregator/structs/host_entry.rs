use crate::address::structs::address_key::AddressKey;
use crate::index::structs::entry_log::EntryLog;
use crate::record::structs::record::Record;

#[derive(Clone, Debug)]
pub struct HostEntry {
    pub host: AddressKey,
    pub entries: EntryLog<Record>,
}
