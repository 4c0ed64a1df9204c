use clap::Parser;
use crate::report::enums::output_format::OutputFormat;
use crate::report::enums::query_mode::QueryMode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Access log to read, overriding `input.log_path`.
    #[arg(long)]
    pub input: Option<String>,
    #[arg(long, value_enum, default_value_t = QueryMode::Networks)]
    pub mode: QueryMode,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
