use std::fs::File;
use std::io::Write;
use log::warn;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::index_config::IndexConfig;
use crate::config::structs::input_config::InputConfig;

impl Configuration {
    pub const DEFAULT_NETWORK_CAPACITY: usize = 65521;
    pub const DEFAULT_HOST_CAPACITY: usize = 1000003;
    pub const MAX_CAPACITY: usize = 100_000_007;

    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            input: InputConfig {
                log_path: String::from("access.log"),
            },
            index: IndexConfig {
                network_capacity: Self::DEFAULT_NETWORK_CAPACITY,
                host_capacity: Self::DEFAULT_HOST_CAPACITY,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Reads `path`. When it is missing or corrupt and `create` is set, a
    /// default file is written and the run still stops so it can be edited.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        match Configuration::load_file(path) {
            Ok(config) => Ok(config),
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start again, exiting now...");
                        Err(CustomError::new(&format!("created {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                }
            }
        }
    }

    /// Rejects an unknown log level, an empty input path, and a capacity of
    /// zero or above `MAX_CAPACITY`.
    /// A capacity that is not prime is accepted with a warning.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let check_map = vec![
            ("[LOG: level]", self.log_level.clone(), r"^(off|trace|debug|info|warn|error)$"),
            ("[INPUT: log_path]", self.input.log_path.clone(), r"^\S.*$"),
        ];
        for (name, value, regex) in check_map {
            Self::validate_value(name, value, regex)?;
        }

        let capacities = [
            ("[INDEX: network_capacity]", self.index.network_capacity),
            ("[INDEX: host_capacity]", self.index.host_capacity),
        ];
        for (name, capacity) in capacities {
            if capacity == 0 {
                return Err(ConfigurationError::ValidationError(format!("{name} must be at least 1")));
            }
            if capacity > Self::MAX_CAPACITY {
                return Err(ConfigurationError::ValidationError(format!("{name} {capacity} exceeds the maximum of {}", Self::MAX_CAPACITY)));
            }
            if !is_prime(capacity) {
                warn!("[VALIDATE CONFIG] {name} {capacity} is not prime, expect longer collision runs");
            }
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: String, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex)
            .map_err(|e| ConfigurationError::ValidationError(format!("{name} has an invalid pattern: {e}")))?;
        if !regex_check.is_match(value.as_str()) {
            return Err(ConfigurationError::ValidationError(format!("Error checking {name} [:] Value: \"{value}\" [:] Regex: \"{regex_check}\"")));
        }
        Ok(())
    }
}

pub fn is_prime(value: usize) -> bool {
    if value < 2 {
        return false;
    }
    if value < 4 {
        return true;
    }
    if value % 2 == 0 {
        return false;
    }
    let mut divisor = 3usize;
    while divisor.saturating_mul(divisor) <= value {
        if value % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
