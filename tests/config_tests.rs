mod common;

use std::fs;
use netlog_aggregator::config::enums::configuration_error::ConfigurationError;
use netlog_aggregator::config::structs::configuration::Configuration;

#[test]
fn test_config_default_values() {
    let config = Configuration::init();
    assert_eq!(config.index.network_capacity, 65521);
    assert_eq!(config.index.host_capacity, 1000003);
    assert!(!config.input.log_path.is_empty(), "Input path should not be empty");
}

#[test]
fn test_config_toml_loading() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    let config_content = r#"
log_level = "warn"

[input]
log_path = "bitacora.txt"

[index]
network_capacity = 251
host_capacity = 4099
"#;

    fs::write(&config_path, config_content).unwrap();
    let config = Configuration::load_file(config_path.to_str().unwrap()).unwrap();
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.input.log_path, "bitacora.txt");
    assert_eq!(config.index.network_capacity, 251);
    assert_eq!(config.index.host_capacity, 4099);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_save_and_reload() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("saved.toml");
    let path = config_path.to_str().unwrap();

    let mut config = Configuration::init();
    config.log_level = "debug".to_string();
    Configuration::save_from_config(path, &config).unwrap();

    assert_eq!(Configuration::load_file(path).unwrap(), config);
}

#[test]
fn test_config_missing_file() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("missing.toml");
    let result = Configuration::load_file(config_path.to_str().unwrap());
    assert!(matches!(result, Err(ConfigurationError::IOError(_))));
}

#[test]
fn test_config_corrupt_file() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("corrupt.toml");
    fs::write(&config_path, "log_level = [").unwrap();
    let result = Configuration::load_file(config_path.to_str().unwrap());
    assert!(matches!(result, Err(ConfigurationError::ParseError(_))));
}

#[test]
fn test_config_load_from_file_creates_default() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    let path = config_path.to_str().unwrap();

    assert!(Configuration::load_from_file(path, false).is_err());
    assert!(!config_path.exists(), "No file without --create-config");

    assert!(Configuration::load_from_file(path, true).is_err(), "A fresh file still stops the run");
    assert!(config_path.exists(), "Config file should be created");

    let config = Configuration::load_from_file(path, false).unwrap();
    assert_eq!(config, Configuration::init());
}

#[test]
fn test_config_validation_errors() {
    let mut config = Configuration::init();
    config.input.log_path = String::new();
    assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));

    let mut config = Configuration::init();
    config.index.network_capacity = 0;
    assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
}
