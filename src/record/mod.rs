//! Access log lines and their parsed form.
//!
//! A line has the shape `<Mon> <day> <HH:MM:SS> <a.b.c.d[:port]> <reason...>`,
//! for example:
//!
//! ```text
//! Jun 14 08:09:12 119.232.101.246:6610 Failed password for illegal user root
//! ```
//!
//! # Example
//!
//! ```rust
//! use netlog_aggregator::record::parse_line;
//!
//! let record = parse_line("Oct 9 10:32:24 423.2.230.77:6166 Failed password for illegal user guest");
//! assert!(record.is_err());
//!
//! let record = parse_line("Oct 9 10:32:24 42.2.230.77:6166 Failed password for illegal user guest").unwrap();
//! assert_eq!(record.host.to_string(), "42.2.230.77");
//! assert_eq!(record.network.to_string(), "42.2");
//! assert_eq!(record.port, 6166);
//! ```

/// Line parsing errors.
pub mod errors;

/// `Record` and `Timestamp`.
pub mod structs;

/// Implementation blocks for records and timestamps.
pub mod impls;

/// The line parser.
pub mod parser;


pub use parser::parse_line;
