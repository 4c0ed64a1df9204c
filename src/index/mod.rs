//! Fixed-capacity open-addressing index and the per-slot collections.
//!
//! # Architecture
//!
//! - `HashIndex` stores `Option<Slot<V>>` in one flat array whose length is
//!   fixed at construction. Collisions are resolved by linear probing with a
//!   step of one, wrapping at the end of the array.
//! - Keys are never removed and never move, so a vacant slot met while
//!   scanning proves the key is absent.
//! - When every slot has been scanned without a match or a vacancy the insert
//!   fails with `IndexError::IndexFull`. There is no resize path.
//! - `UniqueSet` and `EntryLog` are the growable child collections a slot
//!   value can own.
//!
//! # Example
//!
//! ```rust
//! use netlog_aggregator::index::structs::hash_index::HashIndex;
//!
//! let mut index: HashIndex<u64> = HashIndex::new(65521).unwrap();
//! let (slot, created) = index.find_or_insert("10.0", || 0).unwrap();
//! slot.value += 1;
//! assert!(created);
//! assert_eq!(index.find("10.0").map(|slot| slot.value), Some(1));
//! assert!(index.find("10.1").is_none());
//! ```

/// Error types for index operations.
pub mod errors;

/// Implementation blocks for the index structures.
pub mod impls;

/// Index, slot, and child collection structures.
pub mod structs;

/// Hashing seam used by the index.
pub mod traits;
