use std::sync::Arc;
use log::{debug, error, info, warn};
use crate::aggregator::enums::stats_event::StatsEvent;
use crate::aggregator::structs::host_entry::HostEntry;
use crate::aggregator::structs::log_aggregator::LogAggregator;
use crate::aggregator::structs::network_entry::NetworkEntry;
use crate::aggregator::structs::stats::Stats;
use crate::config::structs::configuration::Configuration;
use crate::index::errors::IndexError;
use crate::index::structs::hash_index::HashIndex;
use crate::record::errors::ParseError;
use crate::record::parser::parse_line;
use crate::record::structs::record::Record;

impl LogAggregator {
    #[tracing::instrument(level = "debug", skip(config))]
    pub fn new(config: Arc<Configuration>) -> Result<LogAggregator, IndexError>
    {
        let networks = HashIndex::new(config.index.network_capacity)?;
        let hosts = HashIndex::new(config.index.host_capacity)?;
        Ok(LogAggregator {
            config,
            networks,
            hosts,
            stats: Stats::default(),
        })
    }

    pub fn with_capacities(network_capacity: usize, host_capacity: usize) -> Result<LogAggregator, IndexError>
    {
        let mut config = Configuration::init();
        config.index.network_capacity = network_capacity;
        config.index.host_capacity = host_capacity;
        Self::new(Arc::new(config))
    }

    /// Adds one record to both indices. Both lookups run before anything is
    /// written, so an `IndexFull` from either index leaves the aggregator
    /// untouched. The error is still fatal for the run.
    pub fn ingest(&mut self, record: Record) -> Result<(), IndexError>
    {
        let host = record.host;
        let prefix = record.network;
        let host_key = host.to_string();
        let network_key = prefix.to_string();

        let created = self.hosts.check_insert(&host_key)?;
        self.networks.check_insert(&network_key)?;

        let (host_slot, _) = self.hosts.find_or_insert(&host_key, || HostEntry::new(host))?;
        host_slot.value.entries.append(record);

        let (network_slot, _) = self.networks.find_or_insert(&network_key, || NetworkEntry::new(prefix))?;
        let network = &mut network_slot.value;
        if created && network.unique_hosts.insert_if_absent(host) {
            network.host_count += 1;
        }
        network.access_count += 1;

        self.update_stats(StatsEvent::RecordsIngested, 1);
        Ok(())
    }

    /// Parses and ingests every line. Lines that do not parse are counted and
    /// skipped; the first `IndexFull` stops ingestion and is returned.
    #[tracing::instrument(level = "debug", skip(self, lines))]
    pub fn ingest_lines<I, S>(&mut self, lines: I) -> Result<Stats, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (index, line) in lines.into_iter().enumerate() {
            self.update_stats(StatsEvent::LinesRead, 1);
            match parse_line(line.as_ref()) {
                Ok(record) => {
                    if let Err(error) = self.ingest(record) {
                        error!("[INGEST] Line {}: {}", index + 1, error);
                        return Err(error);
                    }
                }
                Err(ParseError::EmptyLine) => {
                    debug!("[INGEST] Line {}: empty, skipped", index + 1);
                    self.update_stats(StatsEvent::LinesSkipped, 1);
                }
                Err(error) => {
                    warn!("[INGEST] Line {}: {}, skipped", index + 1, error);
                    self.update_stats(StatsEvent::LinesSkipped, 1);
                }
            }
        }

        let stats = self.get_stats();
        info!(
            "[INGEST] Lines: {} - Skipped: {} - Records: {} - Networks: {}/{} ({:.4} load) - Hosts: {}/{} ({:.4} load)",
            stats.lines_read,
            stats.lines_skipped,
            stats.records_ingested,
            stats.networks,
            self.config.index.network_capacity,
            self.networks.load_factor(),
            stats.hosts,
            self.config.index.host_capacity,
            self.hosts.load_factor()
        );
        Ok(stats)
    }
}
