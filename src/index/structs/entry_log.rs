/// Append-only sequence with amortized doubling growth.
///
/// The first append reserves room for [`EntryLog::SEED_CAPACITY`] items; every
/// later overflow doubles the capacity.
#[derive(Clone, Debug)]
pub struct EntryLog<T> {
    pub(crate) items: Vec<T>,
}
