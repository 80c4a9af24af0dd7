//! Json values as encoder input, and the json test vector format.

use std::collections::BTreeMap;
use std::io::Read;
use serde::Deserialize;
use serde_json::Value;
use common::hex_to_bytes;
use crate::error::Error;
use crate::item::Item;

/// `null` is empty, unsigned numbers are integers, arrays are lists and strings are
/// text or `0x` hex. A string starting with `#` holds a decimal integer too large
/// for a json number.
impl TryFrom<&Value> for Item {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Null => Ok(Item::Empty),
            Value::Number(n) => match n.as_u64() {
                Some(u) => Ok(Item::from(u)),
                None if n.is_i64() => Err(Error::InvalidInteger),
                None => Err(Error::UnsupportedVariant(format!("float {}", n))),
            },
            Value::String(s) => match s.strip_prefix('#') {
                Some(big) => Item::parse_uint(big),
                None => Ok(Item::Str(s.clone())),
            },
            Value::Array(values) => values
                .iter()
                .map(Item::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Item::List),
            Value::Bool(b) => Err(Error::UnsupportedVariant(format!("bool {}", b))),
            Value::Object(_) => Err(Error::UnsupportedVariant("object".to_string())),
        }
    }
}

/// A single encoding case
#[derive(Debug, PartialEq, Deserialize)]
pub struct EncodingVector {
    #[serde(rename = "in")]
    pub input: Value,
    /// Expected encoding as `0x` hex
    pub out: String,
}

impl EncodingVector {
    pub fn item(&self) -> Result<Item, Error> {
        Item::try_from(&self.input)
    }

    pub fn expected(&self) -> Result<Vec<u8>, Error> {
        Ok(hex_to_bytes(&self.out)?)
    }
}

/// Encoding test deserializer, a map of case name to [`EncodingVector`].
#[derive(Debug, PartialEq, Deserialize)]
pub struct EncodingTest(BTreeMap<String, EncodingVector>);

impl IntoIterator for EncodingTest {
    type Item = <BTreeMap<String, EncodingVector> as IntoIterator>::Item;
    type IntoIter = <BTreeMap<String, EncodingVector> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl EncodingTest {
    /// Loads test from json.
    pub fn load<R>(reader: R) -> Result<Self, Error>
    where
        R: Read,
    {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::{encode, EncodingTest, Error, Item};

    const RLP_TEST: &[u8] = include_bytes!("../res/rlptest.json");

    #[test]
    fn rlp_test_vectors_pass() {
        let _ = env_logger::builder().is_test(true).try_init();
        let test = EncodingTest::load(RLP_TEST).unwrap();
        let mut count = 0;
        for (name, vector) in test {
            let item = vector.item().unwrap();
            assert_eq!(encode(&item).unwrap(), vector.expected().unwrap(), "vector {}", name);
            count += 1;
        }
        assert_eq!(count, 27);
    }

    #[test]
    fn json_values_convert() {
        let value = json!(["", "", [""]]);
        assert_eq!(encode(&Item::try_from(&value).unwrap()).unwrap(), vec![196, 128, 128, 193, 128]);

        assert_eq!(Item::try_from(&json!(null)).unwrap(), Item::Empty);
        assert_eq!(Item::try_from(&json!(1024)).unwrap(), Item::from(1024u64));
        assert_eq!(Item::try_from(&json!("#1024")).unwrap(), Item::from(1024u64));
        assert_eq!(Item::try_from(&json!("0x0400")).unwrap(), Item::from("0x0400"));
    }

    #[test]
    fn unsupported_json_values_fail() {
        assert_eq!(Item::try_from(&json!(-1)), Err(Error::InvalidInteger));
        assert_eq!(Item::try_from(&json!("#-1")), Err(Error::InvalidInteger));
        assert_eq!(Item::try_from(&json!("#1.5")), Err(Error::InvalidInteger));
        assert!(matches!(Item::try_from(&json!(1.5)), Err(Error::UnsupportedVariant(_))));
        assert!(matches!(Item::try_from(&json!(true)), Err(Error::UnsupportedVariant(_))));
        assert!(matches!(Item::try_from(&json!({ "a": 1 })), Err(Error::UnsupportedVariant(_))));
        // nested failures are not swallowed
        assert!(matches!(Item::try_from(&json!(["a", [{}]])), Err(Error::UnsupportedVariant(_))));
    }

    #[test]
    fn malformed_test_file_fails() {
        assert!(matches!(EncodingTest::load("{ \"a\": 1 }".as_bytes()), Err(Error::Json(_))));
    }
}
