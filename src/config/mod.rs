//! Configuration management module.
//!
//! Loads, saves and validates the TOML configuration file.
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **input**: where the access log is read from
//! - **index**: slot counts of the network and host indices
//!
//! ```toml
//! log_level = "info"
//!
//! [input]
//! log_path = "access.log"
//!
//! [index]
//! network_capacity = 65521
//! host_capacity = 1000003
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use netlog_aggregator::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! config.validate()?;
//! ```

/// Configuration error type.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
