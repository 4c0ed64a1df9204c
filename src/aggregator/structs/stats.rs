use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub lines_read: u64,
    pub lines_skipped: u64,
    pub records_ingested: u64,
    pub networks: u64,
    pub hosts: u64,
}
