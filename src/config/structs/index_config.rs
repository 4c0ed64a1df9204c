use serde::{Deserialize, Serialize};

/// Slot counts are fixed for the whole run. Primes spread the fold hash best.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    pub network_capacity: usize,
    pub host_capacity: usize,
}
