/// Computes the initial slot position of a key.
///
/// The result must be deterministic and lie in `[0, capacity)`. Every byte of
/// the key should influence it.
pub trait KeyHasher {
    fn hash(&self, key: &[u8], capacity: usize) -> usize;
}
