use num_bigint::BigUint;
use num_traits::Zero;
use common::{ensure, human_readable, text_or_hex_to_bytes};

use crate::config::EncoderConfig;
use crate::error::Error;
use crate::item::Item;
use crate::traits::Encodable;
use crate::{LEN_CUTOFF, LIST_OFFSET, STR_OFFSET};

/// Encodes [`Item`]s into canonical RLP. Holds no state besides its config, every
/// call starts from an empty buffer.
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn encode(&self, item: &Item) -> Result<Vec<u8>, Error> {
        let mut out = vec![];
        let r = self.append(item, 0, &mut out);
        finish_encode(r, out)
    }

    /// Same as encoding `Item::List` holding `items`.
    pub fn encode_list(&self, items: &[Item]) -> Result<Vec<u8>, Error> {
        let mut out = vec![];
        let r = self.append_list(items, 1, &mut out);
        finish_encode(r, out)
    }

    /// Encodes every element of `items` into a single list. Nested [`Item`] lists
    /// count against the configured depth, the outer list being depth one.
    pub fn encode_iter<I, T>(&self, items: I) -> Result<Vec<u8>, Error>
    where
        I: IntoIterator<Item = T>,
        T: Encodable,
    {
        let mut out = vec![];
        let r = self.check_depth(1).and_then(|_| {
            for item in items {
                item.rlp_append_nested(self, 1, &mut out)?;
            }
            finish_list(0, &mut out)
        });
        finish_encode(r, out)
    }

    /// `depth` is the number of lists enclosing `item`.
    pub(crate) fn append(&self, item: &Item, depth: usize, out: &mut Vec<u8>) -> Result<(), Error> {
        match item {
            Item::Empty => append_bytes(&[], out),
            Item::Bytes(bytes) => append_bytes(bytes, out),
            Item::Str(s) => append_bytes(&text_or_hex_to_bytes(s)?, out),
            Item::Uint(n) => append_uint(n, out),
            Item::Raw(raw) => {
                out.extend_from_slice(raw);
                Ok(())
            }
            Item::List(items) => self.append_list(items, depth + 1, out),
        }
    }

    fn append_list(&self, items: &[Item], depth: usize, out: &mut Vec<u8>) -> Result<(), Error> {
        self.check_depth(depth)?;

        let pos = out.len();
        for item in items {
            self.append(item, depth, out)?;
        }
        finish_list(pos, out)
    }

    fn check_depth(&self, depth: usize) -> Result<(), Error> {
        let max_depth = self.config().max_depth;
        ensure!(depth <= max_depth, Error::DepthLimitExceeded(max_depth))
    }
}

/// Logs the outcome of a top level encode.
fn finish_encode(r: Result<(), Error>, out: Vec<u8>) -> Result<Vec<u8>, Error> {
    if let Err(e) = r {
        log::debug!("rlp encoding failed: {}", e);
        return Err(e);
    }
    if log::log_enabled!(log::Level::Trace) {
        log::trace!("encoded {} bytes: {}", out.len(), human_readable(&out));
    }
    Ok(out)
}

/// Prefix for a payload of `len` bytes. `offset` is [`STR_OFFSET`] for byte strings
/// and [`LIST_OFFSET`] for lists.
pub fn length_prefix(len: usize, offset: u8) -> Result<Vec<u8>, Error> {
    if len <= LEN_CUTOFF as usize {
        let first = offset.checked_add(len as u8).ok_or(Error::InvalidLength)?;
        return Ok(vec![first]);
    }

    let len_bytes = to_binary(len);
    let first = offset
        .checked_add(LEN_CUTOFF)
        .and_then(|b| b.checked_add(len_bytes.len() as u8))
        .ok_or(Error::InvalidLength)?;

    let mut prefix = Vec::with_capacity(len_bytes.len() + 1);
    prefix.push(first);
    prefix.extend(len_bytes);
    Ok(prefix)
}

pub fn encode_bytes(bytes: &[u8]) -> Result<Vec<u8>, Error> {
    let mut out = vec![];
    append_bytes(bytes, &mut out)?;
    Ok(out)
}

pub fn encode_uint(n: &BigUint) -> Result<Vec<u8>, Error> {
    let mut out = vec![];
    append_uint(n, &mut out)?;
    Ok(out)
}

/// Encodes every element of `items` into a single list with the default config.
pub fn encode_iter<I, T>(items: I) -> Result<Vec<u8>, Error>
where
    I: IntoIterator<Item = T>,
    T: Encodable,
{
    Encoder::default().encode_iter(items)
}

pub(crate) fn append_bytes(bytes: &[u8], out: &mut Vec<u8>) -> Result<(), Error> {
    match bytes {
        [b] if *b < STR_OFFSET => out.push(*b),
        _ => {
            out.extend(length_prefix(bytes.len(), STR_OFFSET)?);
            out.extend_from_slice(bytes);
        }
    }
    Ok(())
}

pub(crate) fn append_uint(n: &BigUint, out: &mut Vec<u8>) -> Result<(), Error> {
    // to_bytes_be gives [0] for zero
    if n.is_zero() {
        return append_bytes(&[], out);
    }
    append_bytes(&n.to_bytes_be(), out)
}

/// Turns everything written to `out` since `pos` into a list.
fn finish_list(pos: usize, out: &mut Vec<u8>) -> Result<(), Error> {
    let prefix = length_prefix(out.len() - pos, LIST_OFFSET)?;
    let prefix_len = prefix.len();
    out.extend(prefix);
    out[pos..].rotate_right(prefix_len);
    Ok(())
}

/// Big endian bytes of `x` without leading zeros, empty for zero.
fn to_binary(x: usize) -> Vec<u8> {
    let leading_empty_bytes = x.leading_zeros() as usize / 8;
    x.to_be_bytes()[leading_empty_bytes..].to_vec()
}
