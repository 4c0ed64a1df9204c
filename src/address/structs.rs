//! Address value types.

/// Four-octet host address.
pub mod address_key;

/// Two-octet network prefix.
pub mod network_prefix;
