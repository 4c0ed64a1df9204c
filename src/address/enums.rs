//! Enumerations for address handling.

/// Errors raised while parsing dotted-quad addresses, prefixes and ports.
pub mod address_error;
