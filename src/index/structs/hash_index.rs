//! Fixed-capacity open-addressing table.

use crate::index::structs::fold_hasher::FoldHasher;
use crate::index::structs::slot::Slot;

/// String-keyed table with linear probing and no resize.
///
/// # Invariants
///
/// - `slots.len()` equals the capacity given at construction and never changes.
/// - An occupied slot never becomes vacant and its key never moves.
/// - For every stored key, probing from `hash(key)` reaches it before any
///   vacant slot.
/// - `len` counts the occupied slots.
///
/// # Behavior When Full
///
/// `find_or_insert` returns `IndexError::IndexFull` after probing every slot.
/// Callers treat this as fatal: nothing is stored and no compaction happens.
#[derive(Debug)]
pub struct HashIndex<V, H = FoldHasher> {
    pub(crate) slots: Vec<Option<Slot<V>>>,
    pub(crate) len: usize,
    pub(crate) hasher: H,
}
