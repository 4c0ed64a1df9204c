use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use crate::record::structs::record::Record;

impl Record {
    /// Range order: host numerically, then timestamp, then reason.
    pub fn compare_range_order(&self, other: &Record) -> Ordering {
        self.host.compare_numeric(&other.host)
            .then_with(|| self.timestamp.ordinal().cmp(&other.timestamp.ordinal()))
            .then_with(|| self.reason.cmp(&other.reason))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.original_line)
    }
}
