#![allow(dead_code)]
use rand::RngExt;
use std::sync::Arc;
use tempfile::TempDir;
use netlog_aggregator::aggregator::structs::log_aggregator::LogAggregator;
use netlog_aggregator::config::structs::configuration::Configuration;

pub type TestConfig = Arc<Configuration>;

pub const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

pub fn create_test_config() -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.log_level = "off".to_string();
    config.index.network_capacity = 1009;
    config.index.host_capacity = 10007;
    Arc::new(config)
}

pub fn create_test_aggregator() -> LogAggregator {
    LogAggregator::new(create_test_config()).unwrap()
}

pub fn aggregator_from(lines: &[String]) -> LogAggregator {
    let mut aggregator = create_test_aggregator();
    aggregator.ingest_lines(lines).unwrap();
    aggregator
}

pub fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

pub fn log_line(month: usize, day: u8, seconds_of_day: u32, address: &str, port: u16, reason: &str) -> String {
    format!(
        "{} {} {:02}:{:02}:{:02} {}:{} {}",
        MONTHS[month % 12],
        day,
        seconds_of_day / 3600 % 24,
        seconds_of_day / 60 % 60,
        seconds_of_day % 60,
        address,
        port,
        reason
    )
}

pub fn random_address() -> String {
    let mut rng = rand::rng();
    let octets: [u8; 4] = rng.random();
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

/// Addresses spread over `networks` prefixes of the form `10.n`.
pub fn random_log(lines: usize, networks: u8) -> Vec<String> {
    let mut rng = rand::rng();
    (0..lines)
        .map(|_| {
            let network = rng.random_range(0..networks.max(1));
            let address = format!("10.{}.{}.{}", network, rng.random::<u8>(), rng.random::<u8>());
            log_line(
                rng.random_range(0..12),
                rng.random_range(1..=28),
                rng.random_range(0..86400),
                &address,
                rng.random(),
                "Failed password for illegal user guest",
            )
        })
        .collect()
}
