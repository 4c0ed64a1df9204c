//! Implementation blocks for the index structures.

/// FoldHasher: the default KeyHasher.
pub mod fold_hasher;

/// HashIndex: construction, probing, insert-or-update, lookup, iteration.
pub mod hash_index;

/// Slot: construction.
pub mod slot;

/// UniqueSet: membership, insertion, sorted copies.
pub mod unique_set;

/// EntryLog: append with doubling growth.
pub mod entry_log;
