pub mod output_format;
pub mod query_mode;
