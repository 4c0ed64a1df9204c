//! Implementation blocks for the address value types.

/// AddressKey: parsing, numeric comparison, Display, FromStr, serde.
pub mod address_key;

/// NetworkPrefix: parsing, Display, FromStr, serde.
pub mod network_prefix;
