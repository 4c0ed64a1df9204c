use crate::aggregator::enums::network_field::NetworkField;
use crate::aggregator::structs::network_entry::NetworkEntry;

impl NetworkField {
    pub fn value_of(&self, entry: &NetworkEntry) -> u64 {
        match self {
            NetworkField::AccessCount => entry.access_count,
            NetworkField::HostCount => entry.host_count,
        }
    }
}
