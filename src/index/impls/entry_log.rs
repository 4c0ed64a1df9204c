use crate::index::structs::entry_log::EntryLog;

impl<T> EntryLog<T> {
    pub const SEED_CAPACITY: usize = 10;

    pub fn new() -> EntryLog<T> {
        EntryLog { items: Vec::new() }
    }

    pub fn append(&mut self, item: T) {
        if self.items.len() == self.items.capacity() {
            let additional = match self.items.capacity() {
                0 => Self::SEED_CAPACITY,
                current => current,
            };
            self.items.reserve_exact(additional);
        }
        self.items.push(item);
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for EntryLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a EntryLog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
