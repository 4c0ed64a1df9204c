/// Duplicate-free collection of child keys.
///
/// Membership is a linear scan. Iteration yields the newest key first, so the
/// set behaves like a list that is always prepended to.
#[derive(Clone, Debug)]
pub struct UniqueSet<K> {
    pub(crate) items: Vec<K>,
}
