use crate::index::structs::fold_hasher::FoldHasher;
use crate::index::traits::key_hasher::KeyHasher;

impl FoldHasher {
    pub const DEFAULT_MULTIPLIER: u64 = 31;
    pub const DEFAULT_PERTURBATION: u64 = 37;

    pub fn new(multiplier: u64, perturbation: u64) -> FoldHasher {
        FoldHasher { multiplier, perturbation }
    }
}

impl Default for FoldHasher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MULTIPLIER, Self::DEFAULT_PERTURBATION)
    }
}

impl KeyHasher for FoldHasher {
    #[inline]
    fn hash(&self, key: &[u8], capacity: usize) -> usize {
        if capacity == 0 {
            return 0;
        }
        let modulus = capacity as u64;
        let mut hash = 0u64;
        for &byte in key {
            hash = hash.wrapping_mul(self.multiplier).wrapping_add(byte as u64) % modulus;
            hash = hash.wrapping_add(self.perturbation) % modulus;
        }
        hash as usize
    }
}
