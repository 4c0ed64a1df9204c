//! IPv4-style address keys and their two-octet network prefixes.
//!
//! Every key stored by the indices is derived from these types. Ordering is
//! always numeric, octet by octet; the textual form is only used as the hash
//! key and for display.
//!
//! # Example
//!
//! ```rust
//! use netlog_aggregator::address::structs::address_key::AddressKey;
//!
//! let low: AddressKey = "10.0.0.9".parse().unwrap();
//! let high: AddressKey = "10.0.0.10".parse().unwrap();
//! assert!(low < high);
//! assert_eq!(low.network().to_string(), "10.0");
//! ```

/// Address parsing errors.
pub mod enums;

/// Implementation blocks: parsing, ordering, Display and serde.
pub mod impls;

/// `AddressKey` and `NetworkPrefix`.
pub mod structs;
