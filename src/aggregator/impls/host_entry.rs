use crate::address::structs::address_key::AddressKey;
use crate::aggregator::structs::host_entry::HostEntry;
use crate::index::structs::entry_log::EntryLog;

impl HostEntry {
    pub fn new(host: AddressKey) -> HostEntry {
        HostEntry {
            host,
            entries: EntryLog::new(),
        }
    }

    pub fn entry_count(&self) -> u64 {
        self.entries.count() as u64
    }
}
