//! Recursive Length Prefix encoding, see https://eth.wiki/fundamentals/rlp

mod config;
mod error;
mod impls;
mod item;
mod json;
mod rlp;
mod traits;

pub use crate::config::{EncoderConfig, DEFAULT_MAX_DEPTH};
pub use crate::error::Error;
pub use crate::item::Item;
pub use crate::json::{EncodingTest, EncodingVector};
pub use crate::rlp::{encode_bytes, encode_iter, encode_uint, length_prefix, Encoder};
pub use crate::traits::Encodable;

/// Offset of the length prefix of a byte string
pub const STR_OFFSET: u8 = 0x80;
/// Offset of the length prefix of a list
pub const LIST_OFFSET: u8 = 0xc0;
/// Longest payload whose length still fits into the prefix byte itself
pub const LEN_CUTOFF: u8 = 55;

/// Encodes the item with the default [`EncoderConfig`].
pub fn encode(item: &Item) -> Result<Vec<u8>, Error> {
    Encoder::default().encode(item)
}

/// Encodes the items as one top level list with the default [`EncoderConfig`].
pub fn encode_list(items: &[Item]) -> Result<Vec<u8>, Error> {
    Encoder::default().encode_list(items)
}
