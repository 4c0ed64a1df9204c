//! Data structures for the index.

/// Default two-multiplier rolling hash.
pub mod fold_hasher;

/// Fixed-capacity open-addressing table.
pub mod hash_index;

/// Occupied table slot: key plus payload.
pub mod slot;

/// Duplicate-free child key collection.
pub mod unique_set;

/// Append-only record collection with doubling growth.
pub mod entry_log;
