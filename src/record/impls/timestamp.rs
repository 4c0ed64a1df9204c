use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use crate::record::errors::ParseError;
use crate::record::structs::timestamp::Timestamp;

pub const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

impl Timestamp {
    pub fn new(month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Result<Timestamp, ParseError> {
        let timestamp = Timestamp { month, day, hour, minute, second };
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) || hour > 23 || minute > 59 || second > 59 {
            return Err(ParseError::Timestamp(timestamp.to_string()));
        }
        Ok(timestamp)
    }

    /// `Jan` is 1, `Dec` is 12.
    pub fn parse_month(name: &str) -> Result<u8, ParseError> {
        MONTHS.iter()
            .position(|month| *month == name)
            .map(|index| index as u8 + 1)
            .ok_or_else(|| ParseError::Month(name.to_string()))
    }

    /// Seconds since the start of a 31-day-month year. Only used for ordering.
    pub fn ordinal(&self) -> u64 {
        let mut value = self.month as u64 * 31 + self.day as u64;
        value = value * 24 + self.hour as u64;
        value = value * 60 + self.minute as u64;
        value * 60 + self.second as u64
    }

    pub fn month_name(&self) -> &'static str {
        match self.month {
            1..=12 => MONTHS[self.month as usize - 1],
            _ => "???",
        }
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {} {:02}:{:02}:{:02}", self.month_name(), self.day, self.hour, self.minute, self.second)
    }
}
