use crate::index::structs::slot::Slot;

impl<V> Slot<V> {
    pub fn new(key: &str, value: V) -> Slot<V> {
        Slot {
            key: key.to_string(),
            value,
        }
    }
}
