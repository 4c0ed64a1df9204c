/// An occupied slot of a `HashIndex`.
///
/// The table stores `Option<Slot<V>>`; a `Some` entry is an occupied slot and
/// stays occupied for the life of the table.
#[derive(Clone, Debug)]
pub struct Slot<V> {
    pub key: String,
    pub value: V,
}
