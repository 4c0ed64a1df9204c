use std::fmt;
use std::fmt::Formatter;
use crate::address::enums::address_error::AddressError;
use crate::address::impls::address_key::parse_octets;
use crate::address::structs::address_key::AddressKey;
use crate::address::structs::network_prefix::NetworkPrefix;

impl NetworkPrefix {
    pub fn parse(text: &str) -> Result<NetworkPrefix, AddressError> {
        parse_octets::<2>(text.trim())
            .map(NetworkPrefix)
            .ok_or_else(|| AddressError::MalformedAddress(text.to_string()))
    }

    pub fn contains(&self, address: &AddressKey) -> bool {
        address.network() == *self
    }
}

impl fmt::Display for NetworkPrefix {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.0[0], self.0[1])
    }
}

impl std::str::FromStr for NetworkPrefix {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::ser::Serialize for NetworkPrefix {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::de::Deserialize<'de> for NetworkPrefix {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        struct NetworkPrefixVisitor;

        impl<'de> serde::de::Visitor<'de> for NetworkPrefixVisitor {
            type Value = NetworkPrefix;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a two-octet network prefix string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                NetworkPrefix::parse(v).map_err(E::custom)
            }
        }
        des.deserialize_str(NetworkPrefixVisitor)
    }
}
