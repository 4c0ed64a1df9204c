use log::debug;
use crate::address::structs::address_key::AddressKey;
use crate::address::structs::network_prefix::NetworkPrefix;
use crate::aggregator::enums::host_field::HostField;
use crate::aggregator::enums::network_field::NetworkField;
use crate::aggregator::structs::host_entry::HostEntry;
use crate::aggregator::structs::log_aggregator::LogAggregator;
use crate::aggregator::structs::network_summary::NetworkSummary;
use crate::record::structs::record::Record;

impl LogAggregator {
    /// Looks up a network by its `a.b` prefix. Surrounding whitespace is
    /// ignored and a parseable prefix is normalized (`01.2` finds `1.2`).
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn query_network(&self, prefix: &str) -> Option<NetworkSummary>
    {
        let prefix = prefix.trim();
        let key = match NetworkPrefix::parse(prefix) {
            Ok(parsed) => parsed.to_string(),
            Err(_) => prefix.to_string(),
        };
        let Some(slot) = self.networks.find(&key) else {
            debug!("[QUERY] Network {key} not found");
            return None;
        };
        let network = &slot.value;
        Some(NetworkSummary {
            prefix: network.prefix,
            access_count: network.access_count,
            host_count: network.host_count,
            sorted_hosts: network.unique_hosts.to_sorted_by(AddressKey::compare_numeric),
        })
    }

    /// Every network sharing the maximum value of `field`, in slot order.
    pub fn query_extreme_networks(&self, field: NetworkField) -> Vec<NetworkPrefix>
    {
        let Some(maximum) = self.networks.iter().map(|slot| field.value_of(&slot.value)).max() else {
            return Vec::new();
        };
        self.networks.iter()
            .filter(|slot| field.value_of(&slot.value) == maximum)
            .map(|slot| slot.value.prefix)
            .collect()
    }

    /// Every host sharing the maximum value of `field`, in slot order.
    pub fn query_extreme_hosts(&self, field: HostField) -> Vec<AddressKey>
    {
        let Some(maximum) = self.hosts.iter().map(|slot| field.value_of(&slot.value)).max() else {
            return Vec::new();
        };
        self.hosts.iter()
            .filter(|slot| field.value_of(&slot.value) == maximum)
            .map(|slot| slot.value.host)
            .collect()
    }

    pub fn query_host(&self, host: &str) -> Option<&HostEntry>
    {
        let key = match AddressKey::parse(host) {
            Ok(parsed) => parsed.to_string(),
            Err(_) => host.trim().to_string(),
        };
        self.hosts.find(&key).map(|slot| &slot.value)
    }

    /// Records of every host in `[low, high]`, ascending by host, then
    /// timestamp, then reason. Bounds given in the wrong order are swapped.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn query_host_range(&self, low: AddressKey, high: AddressKey) -> Vec<&Record>
    {
        let (low, high) = if low > high { (high, low) } else { (low, high) };
        let mut records: Vec<&Record> = self.hosts.iter()
            .filter(|slot| slot.value.host >= low && slot.value.host <= high)
            .flat_map(|slot| slot.value.entries.iter())
            .collect();
        records.sort_by(|a, b| a.compare_range_order(b));
        debug!("[QUERY] Range {low} - {high}: {} records", records.len());
        records
    }

    /// Every record in range order, from `0.0.0.0` to `255.255.255.255`.
    pub fn query_all_sorted(&self) -> Vec<&Record>
    {
        self.query_host_range(AddressKey::from(u32::MIN), AddressKey::from(u32::MAX))
    }
}
