use std::fmt;
use num_bigint::{BigInt, BigUint};
use common::{append_hex_prefix, human_readable, is_hex_prefixed, minimal_big_endian_hex, remove_hex_prefix, U128, U256, U512};
use crate::error::Error;

/// A value that can be RLP encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// Absent value, encodes like an empty byte string
    Empty,
    /// Raw byte string
    Bytes(Vec<u8>),
    /// Utf-8 text, or hex when `0x` prefixed
    Str(String),
    /// Unsigned integer of any size
    Uint(BigUint),
    List(Vec<Item>),
    /// Bytes that are already RLP encoded. They are written out as they are, no
    /// prefix is added and the single byte rule is not applied.
    Raw(Vec<u8>),
}

impl Item {
    /// Parses a non-negative whole number, decimal or `0x` hex.
    pub fn parse_uint(s: &str) -> Result<Self, Error> {
        let (digits, radix) = if is_hex_prefixed(s) {
            (remove_hex_prefix(s), 16)
        } else {
            (s, 10)
        };
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(Error::InvalidInteger);
        }
        BigUint::parse_bytes(digits.as_bytes(), radix)
            .map(Item::Uint)
            .ok_or(Error::InvalidInteger)
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Item::Str(s.to_string())
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Item::Str(s)
    }
}

impl From<&[u8]> for Item {
    fn from(bytes: &[u8]) -> Self {
        Item::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Item {
    fn from(bytes: Vec<u8>) -> Self {
        Item::Bytes(bytes)
    }
}

impl From<Vec<Item>> for Item {
    fn from(items: Vec<Item>) -> Self {
        Item::List(items)
    }
}

impl From<BigUint> for Item {
    fn from(n: BigUint) -> Self {
        Item::Uint(n)
    }
}

impl From<U256> for Item {
    fn from(n: U256) -> Self {
        let mut buffer = [0u8; 32];
        n.to_big_endian(&mut buffer);
        Item::Uint(BigUint::from_bytes_be(&buffer))
    }
}

impl From<U512> for Item {
    fn from(n: U512) -> Self {
        let mut buffer = [0u8; 64];
        n.to_big_endian(&mut buffer);
        Item::Uint(BigUint::from_bytes_be(&buffer))
    }
}

impl From<U128> for Item {
    fn from(n: U128) -> Self {
        let mut buffer = [0u8; 16];
        n.to_big_endian(&mut buffer);
        Item::Uint(BigUint::from_bytes_be(&buffer))
    }
}

impl<T: Into<Item>> From<Option<T>> for Item {
    fn from(opt: Option<T>) -> Self {
        match opt {
            None => Item::Empty,
            Some(v) => v.into(),
        }
    }
}

macro_rules! impl_from_for_u {
	($name: ident) => {
		impl From<$name> for Item {
			fn from(n: $name) -> Self {
				Item::Uint(BigUint::from(n))
			}
		}
	};
}

impl_from_for_u!(u8);
impl_from_for_u!(u16);
impl_from_for_u!(u32);
impl_from_for_u!(u64);
impl_from_for_u!(u128);
impl_from_for_u!(usize);

macro_rules! impl_try_from_for_i {
	($name: ident) => {
		impl TryFrom<$name> for Item {
			type Error = Error;

			fn try_from(n: $name) -> Result<Self, Error> {
				BigInt::from(n).try_into()
			}
		}
	};
}

impl_try_from_for_i!(i32);
impl_try_from_for_i!(i64);
impl_try_from_for_i!(i128);

impl TryFrom<BigInt> for Item {
    type Error = Error;

    fn try_from(n: BigInt) -> Result<Self, Error> {
        n.to_biguint().map(Item::Uint).ok_or(Error::InvalidInteger)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Item::Empty => write!(f, "empty"),
            Item::Bytes(bytes) => write!(f, "bytes[{}]", human_readable(bytes)),
            Item::Str(s) => write!(f, "{:?}", s),
            Item::Uint(n) => write!(f, "{}", append_hex_prefix(&minimal_big_endian_hex(n))),
            Item::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Item::Raw(raw) => write!(f, "raw[{}]", human_readable(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::{BigInt, BigUint};
    use common::{U256, U512};
    use crate::{encode, Error, Item};

    #[test]
    fn parse_uint_works() {
        assert_eq!(Item::parse_uint("1024").unwrap(), Item::from(1024u64));
        assert_eq!(Item::parse_uint("0x400").unwrap(), Item::from(1024u64));
        assert_eq!(Item::parse_uint("0").unwrap(), Item::from(0u8));

        assert_eq!(Item::parse_uint("-1"), Err(Error::InvalidInteger));
        assert_eq!(Item::parse_uint("1.5"), Err(Error::InvalidInteger));
        assert_eq!(Item::parse_uint("+1"), Err(Error::InvalidInteger));
        assert_eq!(Item::parse_uint("1_000"), Err(Error::InvalidInteger));
        assert_eq!(Item::parse_uint(""), Err(Error::InvalidInteger));
        assert_eq!(Item::parse_uint("0x"), Err(Error::InvalidInteger));
        assert_eq!(Item::parse_uint("0xfg"), Err(Error::InvalidInteger));
    }

    #[test]
    fn negative_integers_are_rejected() {
        assert_eq!(Item::try_from(-1i64), Err(Error::InvalidInteger));
        assert_eq!(Item::try_from(i128::MIN), Err(Error::InvalidInteger));
        assert_eq!(Item::try_from(BigInt::from(-5)), Err(Error::InvalidInteger));
        assert_eq!(Item::try_from(1024i32).unwrap(), Item::from(1024u32));
    }

    #[test]
    fn fixed_width_uint_works() {
        let n = U256::from(1024u64);
        assert_eq!(Item::from(n), Item::Uint(BigUint::from(1024u32)));
        assert_eq!(encode(&Item::from(U256::zero())).unwrap(), vec![0x80]);
        assert_eq!(encode(&Item::from(U256::max_value())).unwrap().len(), 33);

        let max = (BigUint::from(1u8) << 512) - 1u8;
        assert_eq!(Item::from(U512::max_value()), Item::Uint(max));
    }

    #[test]
    fn option_works() {
        assert_eq!(Item::from(None::<u64>), Item::Empty);
        assert_eq!(Item::from(Some("dog")), Item::from("dog"));
    }

    #[test]
    fn display_works() {
        let item = Item::List(vec![
            Item::from("dog"),
            Item::from(1024u64),
            Item::Bytes(vec![1, 2]),
            Item::Empty,
            Item::List(vec![]),
        ]);
        assert_eq!(item.to_string(), r#"["dog", 0x0400, bytes[0x01,0x02], empty, []]"#);
    }
}
