use serde::{Deserialize, Serialize};
use crate::config::structs::index_config::IndexConfig;
use crate::config::structs::input_config::InputConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub log_level: String,
    pub input: InputConfig,
    pub index: IndexConfig,
}
