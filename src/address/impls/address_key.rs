use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use crate::address::enums::address_error::AddressError;
use crate::address::structs::address_key::AddressKey;
use crate::address::structs::network_prefix::NetworkPrefix;

/// Splits `text` on `.` into exactly `N` decimal octets.
///
/// Returns `None` for a wrong group count, an empty group, a non-digit
/// character or a value above 255.
pub(crate) fn parse_octets<const N: usize>(text: &str) -> Option<[u8; N]> {
    let mut octets = [0u8; N];
    let mut groups = text.split('.');
    for octet in octets.iter_mut() {
        let group = groups.next()?;
        if group.is_empty() || group.len() > 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *octet = group.parse::<u16>().ok().and_then(|value| u8::try_from(value).ok())?;
    }
    if groups.next().is_some() {
        return None;
    }
    Some(octets)
}

impl AddressKey {
    pub fn parse(text: &str) -> Result<AddressKey, AddressError> {
        parse_octets::<4>(text.trim())
            .map(AddressKey)
            .ok_or_else(|| AddressError::MalformedAddress(text.to_string()))
    }

    /// Parses `a.b.c.d[:port]`, splitting at the first `:`.
    ///
    /// A missing or empty port yields `0`.
    pub fn parse_with_port(text: &str) -> Result<(AddressKey, u16), AddressError> {
        let (address, port) = match text.split_once(':') {
            None => (text, ""),
            Some((address, port)) => (address, port),
        };
        let key = Self::parse(address)?;
        if port.is_empty() {
            return Ok((key, 0));
        }
        let port = port.parse::<u16>().map_err(|_| AddressError::MalformedPort(port.to_string()))?;
        Ok((key, port))
    }

    /// Octet-by-octet numeric comparison, left to right.
    pub fn compare_numeric(&self, other: &AddressKey) -> Ordering {
        for (left, right) in self.0.iter().zip(other.0.iter()) {
            match left.cmp(right) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }

    pub fn network(&self) -> NetworkPrefix {
        NetworkPrefix([self.0[0], self.0[1]])
    }

    pub fn value(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

impl Ord for AddressKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_numeric(other)
    }
}

impl PartialOrd for AddressKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u32> for AddressKey {
    fn from(value: u32) -> Self {
        AddressKey(value.to_be_bytes())
    }
}

impl fmt::Display for AddressKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}

impl std::str::FromStr for AddressKey {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::ser::Serialize for AddressKey {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::de::Deserialize<'de> for AddressKey {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        struct AddressKeyVisitor;

        impl<'de> serde::de::Visitor<'de> for AddressKeyVisitor {
            type Value = AddressKey;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a dotted-quad address string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                AddressKey::parse(v).map_err(E::custom)
            }
        }
        des.deserialize_str(AddressKeyVisitor)
    }
}
