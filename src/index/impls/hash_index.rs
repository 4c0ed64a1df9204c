use log::debug;
use crate::index::errors::IndexError;
use crate::index::structs::fold_hasher::FoldHasher;
use crate::index::structs::hash_index::HashIndex;
use crate::index::structs::slot::Slot;
use crate::index::traits::key_hasher::KeyHasher;

enum Lookup {
    Vacant(usize),
    Occupied(usize),
    Exhausted,
}

impl<V> HashIndex<V, FoldHasher> {
    pub fn new(capacity: usize) -> Result<HashIndex<V, FoldHasher>, IndexError> {
        Self::with_hasher(capacity, FoldHasher::default())
    }
}

impl<V, H: KeyHasher> HashIndex<V, H> {
    pub fn with_hasher(capacity: usize, hasher: H) -> Result<HashIndex<V, H>, IndexError> {
        if capacity == 0 {
            return Err(IndexError::InvalidCapacity(capacity));
        }
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity).map_err(|_| IndexError::InvalidCapacity(capacity))?;
        slots.resize_with(capacity, || None);
        debug!("[INDEX] Allocated {capacity} slots");
        Ok(HashIndex {
            slots,
            len: 0,
            hasher,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Initial slot position of `key`, always in `[0, capacity)`.
    #[inline]
    pub fn hash(&self, key: &str) -> usize {
        self.hasher.hash(key.as_bytes(), self.capacity()) % self.capacity()
    }

    fn locate(&self, key: &str) -> Lookup {
        let capacity = self.capacity();
        let mut index = self.hash(key);
        for _ in 0..capacity {
            match &self.slots[index] {
                None => return Lookup::Vacant(index),
                Some(slot) if slot.key == key => return Lookup::Occupied(index),
                Some(_) => index = (index + 1) % capacity,
            }
        }
        Lookup::Exhausted
    }

    /// Runs the insert lookup without writing. `Ok(true)` means `key` would get
    /// a new slot, `Ok(false)` that it is already stored.
    pub fn check_insert(&self, key: &str) -> Result<bool, IndexError> {
        match self.locate(key) {
            Lookup::Vacant(_) => Ok(true),
            Lookup::Occupied(_) => Ok(false),
            Lookup::Exhausted => Err(IndexError::IndexFull { capacity: self.capacity() }),
        }
    }

    /// Returns the slot holding `key`, creating it with `make_default` when the
    /// scan reaches a vacant slot first. The flag is `true` for a new slot.
    pub fn find_or_insert<F>(&mut self, key: &str, make_default: F) -> Result<(&mut Slot<V>, bool), IndexError>
    where
        F: FnOnce() -> V,
    {
        let (index, created) = match self.locate(key) {
            Lookup::Vacant(index) => (index, true),
            Lookup::Occupied(index) => (index, false),
            Lookup::Exhausted => {
                return Err(IndexError::IndexFull { capacity: self.capacity() });
            }
        };
        if created {
            self.len += 1;
        }
        let slot = self.slots[index].get_or_insert_with(|| Slot::new(key, make_default()));
        Ok((slot, created))
    }

    pub fn find(&self, key: &str) -> Option<&Slot<V>> {
        match self.locate(key) {
            Lookup::Occupied(index) => self.slots[index].as_ref(),
            Lookup::Vacant(_) | Lookup::Exhausted => None,
        }
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut Slot<V>> {
        match self.locate(key) {
            Lookup::Occupied(index) => self.slots[index].as_mut(),
            Lookup::Vacant(_) | Lookup::Exhausted => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Occupied slots in slot-index order.
    pub fn iter(&self) -> impl Iterator<Item = &Slot<V>> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }

    pub fn for_each_occupied<F>(&self, mut visitor: F)
    where
        F: FnMut(&Slot<V>),
    {
        for slot in self.iter() {
            visitor(slot);
        }
    }
}
