//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Input file settings.
pub mod input_config;

/// Index capacity settings.
pub mod index_config;
