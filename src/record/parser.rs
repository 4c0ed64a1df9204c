use once_cell::sync::Lazy;
use regex::Regex;
use crate::address::structs::address_key::AddressKey;
use crate::record::errors::ParseError;
use crate::record::structs::record::Record;
use crate::record::structs::timestamp::Timestamp;

static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\w{3})\s+(\d{1,2})\s+(\d{2}):(\d{2}):(\d{2})\s+(\S+)\s*(.*)$")
        .expect("line pattern is a valid regex")
});

/// Parses one log line. Surrounding whitespace, including `\r`, is not part
/// of the stored line.
pub fn parse_line(line: &str) -> Result<Record, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::EmptyLine);
    }
    let captures = LINE_PATTERN.captures(line).ok_or_else(|| ParseError::Format(line.to_string()))?;
    let field = |index: usize| captures.get(index).map_or("", |m| m.as_str());
    let number = |index: usize| field(index).parse::<u8>().map_err(|_| ParseError::Timestamp(line.to_string()));

    let month = Timestamp::parse_month(field(1))?;
    let timestamp = Timestamp::new(month, number(2)?, number(3)?, number(4)?, number(5)?)?;
    let (host, port) = AddressKey::parse_with_port(field(6))?;

    Ok(Record {
        network: host.network(),
        host,
        timestamp,
        port,
        reason: field(7).to_string(),
        original_line: line.to_string(),
    })
}
