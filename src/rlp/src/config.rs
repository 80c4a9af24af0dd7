use std::io::Read;
use serde::Deserialize;
use crate::error::Error;

pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Encoder configuration
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncoderConfig {
    /// Deepest list nesting accepted. The outermost list is at depth one.
    pub max_depth: usize,
}

impl EncoderConfig {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Loads the config from json, missing fields take their default.
    pub fn load<R>(reader: R) -> Result<Self, Error>
    where
        R: Read,
    {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

#[cfg(test)]
mod tests {
    use crate::{EncoderConfig, Error, DEFAULT_MAX_DEPTH};

    #[test]
    fn load_works() {
        let config = EncoderConfig::load(r#"{ "max_depth": 16 }"#.as_bytes()).unwrap();
        assert_eq!(config, EncoderConfig::with_max_depth(16));

        let config = EncoderConfig::load("{}".as_bytes()).unwrap();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn load_rejects_unknown_fields() {
        let r = EncoderConfig::load(r#"{ "depth": 16 }"#.as_bytes());
        assert!(matches!(r, Err(Error::Json(_))));
    }
}
