//! Helpers to move between `0x` hex strings, plain text and raw bytes.

use num_bigint::BigUint;
use crate::error::Error;

pub const HEX_PREFIX: &str = "0x";

/// Checks whether the string starts with `0x`
pub fn is_hex_prefixed(input: &str) -> bool {
    input.starts_with(HEX_PREFIX)
}

/// Prepends `0x` to the string unless it is already there
pub fn append_hex_prefix(input: &str) -> String {
    if is_hex_prefixed(input) {
        input.to_string()
    } else {
        format!("{}{}", HEX_PREFIX, input)
    }
}

/// Strips a single leading `0x` from the string if present
pub fn remove_hex_prefix(input: &str) -> &str {
    input.strip_prefix(HEX_PREFIX).unwrap_or(input)
}

/// Whether the string has an even number of characters
pub fn is_padded(input: &str) -> bool {
    input.len() % 2 == 0
}

/// Removes the `0x` prefix and left pads a `0` nibble so the result has even length.
pub fn pad_hex_string(input: &str) -> String {
    let hex = remove_hex_prefix(input);
    if is_padded(hex) {
        hex.to_string()
    } else {
        format!("0{}", hex)
    }
}

/// Decodes a hex string, with or without `0x`, into bytes. Odd length input is
/// treated as if it had a leading zero nibble, so `0xb9f` becomes `[0x0b, 0x9f]`.
pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>, Error> {
    Ok(hex::decode(pad_hex_string(input))?)
}

/// `0x` prefixed strings are decoded as hex, everything else is taken as utf-8 text.
pub fn text_or_hex_to_bytes(input: &str) -> Result<Vec<u8>, Error> {
    if is_hex_prefixed(input) {
        hex_to_bytes(input)
    } else {
        Ok(input.as_bytes().to_vec())
    }
}

/// Even length hex of the number, no prefix. Zero is rendered as `00`.
pub fn number_to_hex(input: u64) -> String {
    let hex = format!("{:x}", input);
    if is_padded(&hex) { hex } else { format!("0{}", hex) }
}

/// Even length big endian hex of an arbitrary precision number with no leading zero byte.
pub fn minimal_big_endian_hex(input: &BigUint) -> String {
    let hex = input.to_str_radix(16);
    if is_padded(&hex) { hex } else { format!("0{}", hex) }
}

/// Formats bytes as `0x68,0x65,0x6c` for logs and debugging
pub fn human_readable(input: &[u8]) -> String {
    input
        .iter()
        .map(|b| format!("0x{:02x}", b))
        .collect::<Vec<_>>()
        .join(",")
}
