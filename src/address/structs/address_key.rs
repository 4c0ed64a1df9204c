//! Dotted-quad host address.

/// A host address made of four octets.
///
/// The octets are kept as numbers so that comparisons never fall back to the
/// text form: `"10.0.0.9"` sorts before `"10.0.0.10"`.
///
/// # Example
///
/// ```rust
/// use netlog_aggregator::address::structs::address_key::AddressKey;
///
/// let key = AddressKey([145, 25, 32, 15]);
/// assert_eq!(key.value(), 0x9119_200F);
/// assert_eq!(key.to_string(), "145.25.32.15");
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct AddressKey(pub [u8; 4]);
