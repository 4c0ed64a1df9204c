/// Rolling hash folding each key byte in two steps.
///
/// For every byte: `h = (h * multiplier + byte) mod T`, then
/// `h = (h + perturbation) mod T`. The perturbation keeps keys that only differ
/// in their last characters (the last octet of an address) from landing in
/// neighbouring runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoldHasher {
    pub multiplier: u64,
    pub perturbation: u64,
}
