//! Statistics event types for ingestion counters.

use serde::{Deserialize, Serialize};

/// Used with `LogAggregator::update_stats()` to bump a counter.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub enum StatsEvent {
    LinesRead,
    LinesSkipped,
    RecordsIngested,
}
