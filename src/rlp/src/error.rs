use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// Integer input is negative or not a whole number.
    InvalidInteger,
    /// The length cannot be represented as a prefix with the given offset.
    InvalidLength,
    /// Input does not map onto any encodable item.
    UnsupportedVariant(String),
    /// Lists are nested deeper than the configured maximum.
    DepthLimitExceeded(usize),
    /// Hex or byte conversion failed.
    Common(common::Error),
    /// Malformed json config or test vector.
    Json(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidInteger => write!(f, "integer must be a non-negative whole number"),
            Error::InvalidLength => write!(f, "length cannot be encoded as a prefix"),
            Error::UnsupportedVariant(v) => write!(f, "unsupported variant: {}", v),
            Error::DepthLimitExceeded(max) => write!(f, "list nesting exceeds max depth {}", max),
            Error::Common(e) => write!(f, "{}", e),
            Error::Json(e) => write!(f, "json error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<common::Error> for Error {
    fn from(e: common::Error) -> Self {
        Error::Common(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}
