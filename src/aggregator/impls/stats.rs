use crate::aggregator::enums::stats_event::StatsEvent;
use crate::aggregator::structs::log_aggregator::LogAggregator;
use crate::aggregator::structs::stats::Stats;

impl LogAggregator {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            lines_read: self.stats.lines_read,
            lines_skipped: self.stats.lines_skipped,
            records_ingested: self.stats.records_ingested,
            networks: self.networks.len() as u64,
            hosts: self.hosts.len() as u64,
        }
    }

    pub fn update_stats(&mut self, event: StatsEvent, value: u64) -> Stats
    {
        match event {
            StatsEvent::LinesRead => {
                self.stats.lines_read += value;
            }
            StatsEvent::LinesSkipped => {
                self.stats.lines_skipped += value;
            }
            StatsEvent::RecordsIngested => {
                self.stats.records_ingested += value;
            }
        }
        self.get_stats()
    }
}
