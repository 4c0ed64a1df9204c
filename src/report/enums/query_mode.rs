use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What the program answers after ingestion.
#[derive(ValueEnum, Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// Read a count and that many network prefixes from stdin, summarize each.
    #[default]
    Networks,
    /// Networks with the most hosts, then hosts with the most records.
    Busiest,
    /// Read two addresses from stdin, list every record between them.
    Range,
    /// Every record in ascending range order. Reads nothing from stdin.
    Sorted,
}

impl QueryMode {
    /// Whether the mode takes its arguments from stdin.
    pub fn reads_queries(self) -> bool
    {
        matches!(self, QueryMode::Networks | QueryMode::Range)
    }
}
