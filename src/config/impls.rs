pub mod configuration;
pub mod configuration_error;
