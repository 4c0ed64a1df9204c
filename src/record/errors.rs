use thiserror::Error;
use crate::address::enums::address_error::AddressError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty line")]
    EmptyLine,

    #[error("Line does not match '<Mon> <day> <HH:MM:SS> <address> <reason>': '{0}'")]
    Format(String),

    #[error("Unknown month: '{0}'")]
    Month(String),

    #[error("Invalid timestamp: '{0}'")]
    Timestamp(String),

    #[error(transparent)]
    Address(#[from] AddressError),
}
