use serde::Serialize;

/// Month and time of day of a log line. There is no year in the log format.
#[derive(Serialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Timestamp {
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}
