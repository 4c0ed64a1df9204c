use std::cmp::Ordering;
use crate::index::structs::unique_set::UniqueSet;

impl<K> UniqueSet<K> {
    pub fn new() -> UniqueSet<K> {
        UniqueSet { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Newest key first.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.items.iter().rev()
    }
}

impl<K: PartialEq> UniqueSet<K> {
    pub fn contains(&self, key: &K) -> bool {
        self.items.iter().any(|item| item == key)
    }

    /// Adds `key` unless already present; returns `true` when it was added.
    pub fn insert_if_absent(&mut self, key: K) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.items.push(key);
        true
    }
}

impl<K: Clone> UniqueSet<K> {
    /// Sorted copy of the keys. The set itself is left untouched.
    pub fn to_sorted_by<F>(&self, compare: F) -> Vec<K>
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        let mut sorted: Vec<K> = self.iter().cloned().collect();
        sorted.sort_by(compare);
        sorted
    }
}

impl<K: Clone + Ord> UniqueSet<K> {
    pub fn to_sorted(&self) -> Vec<K> {
        self.to_sorted_by(K::cmp)
    }
}

impl<K> Default for UniqueSet<K> {
    fn default() -> Self {
        Self::new()
    }
}
