use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Malformed address: '{0}'")]
    MalformedAddress(String),

    #[error("Malformed port: '{0}'")]
    MalformedPort(String),
}
