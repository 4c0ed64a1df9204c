use serde::{Deserialize, Serialize};

/// Counter of a network slot that an extreme query maximizes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkField {
    AccessCount,
    HostCount,
}
