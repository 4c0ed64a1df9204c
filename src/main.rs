use std::io::Read;
use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use netlog_aggregator::aggregator::structs::log_aggregator::LogAggregator;
use netlog_aggregator::common::common::setup_logging;
use netlog_aggregator::config::structs::configuration::Configuration;
use netlog_aggregator::report::report::answer;
use netlog_aggregator::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main()
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    if let Some(input) = args.input.clone() {
        config.input.log_path = input;
    }

    if let Err(e) = setup_logging(&config) {
        eprintln!("{e}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    info!("[VALIDATE] Validating configuration...");
    if let Err(e) = config.validate() {
        error!("{e}");
        exit(101);
    }
    let config = Arc::new(config);

    let data = match std::fs::read(&config.input.log_path) {
        Ok(data) => data,
        Err(e) => {
            error!("[INPUT] Unable to read {}: {}", config.input.log_path, e);
            exit(1);
        }
    };

    let mut aggregator = match LogAggregator::new(config.clone()) {
        Ok(aggregator) => aggregator,
        Err(e) => {
            error!("[INDEX] {e}");
            exit(1);
        }
    };
    if aggregator.ingest_lines(String::from_utf8_lossy(&data).lines()).is_err() {
        exit(1);
    }
    drop(data);

    let mut queries = String::new();
    if args.mode.reads_queries() {
        if let Err(e) = std::io::stdin().read_to_string(&mut queries) {
            error!("[INPUT] Unable to read queries from stdin: {e}");
            exit(1);
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = answer(&aggregator, args.mode, args.format, &queries, &mut out) {
        error!("[QUERY] {e}");
        exit(1);
    }
}
