use std::fmt;
use hex::FromHexError;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// The hex string does not describe a whole number of bytes
    InvalidLength,
    /// The hex string contains a character outside of `[0-9a-fA-F]`
    CannotParseHexString,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidLength => write!(f, "invalid hex length"),
            Error::CannotParseHexString => write!(f, "cannot parse hex string"),
        }
    }
}

impl std::error::Error for Error {}

impl From<FromHexError> for Error {
    fn from(e: FromHexError) -> Self {
        match e {
            FromHexError::InvalidHexCharacter { .. } => Error::CannotParseHexString,
            _ => Error::InvalidLength,
        }
    }
}
