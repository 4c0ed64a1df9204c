use crate::aggregator::enums::host_field::HostField;
use crate::aggregator::structs::host_entry::HostEntry;

impl HostField {
    pub fn value_of(&self, entry: &HostEntry) -> u64 {
        match self {
            HostField::EntryCount => entry.entry_count(),
        }
    }
}
