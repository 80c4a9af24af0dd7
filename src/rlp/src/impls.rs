use num_bigint::BigUint;
use common::{text_or_hex_to_bytes, U128, U256, U512};
use crate::error::Error;
use crate::item::Item;
use crate::rlp::{append_bytes, append_uint, Encoder};
use crate::traits::Encodable;

impl<T: Encodable + ?Sized> Encodable for &T {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        (**self).rlp_append(out)
    }

    fn rlp_append_nested(&self, encoder: &Encoder, depth: usize, out: &mut Vec<u8>) -> Result<(), Error> {
        (**self).rlp_append_nested(encoder, depth, out)
    }
}

impl Encodable for str {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        append_bytes(&text_or_hex_to_bytes(self)?, out)
    }
}

impl Encodable for String {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        self.as_str().rlp_append(out)
    }
}

impl Encodable for [u8] {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        append_bytes(self, out)
    }
}

impl Encodable for Vec<u8> {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        append_bytes(self, out)
    }
}

impl Encodable for BigUint {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        append_uint(self, out)
    }
}

impl Encodable for Item {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        Encoder::default().append(self, 0, out)
    }

    fn rlp_append_nested(&self, encoder: &Encoder, depth: usize, out: &mut Vec<u8>) -> Result<(), Error> {
        encoder.append(self, depth, out)
    }
}

impl<T: Encodable> Encodable for Option<T> {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        match self {
            None => append_bytes(&[], out),
            Some(v) => v.rlp_append(out),
        }
    }

    fn rlp_append_nested(&self, encoder: &Encoder, depth: usize, out: &mut Vec<u8>) -> Result<(), Error> {
        match self {
            None => append_bytes(&[], out),
            Some(v) => v.rlp_append_nested(encoder, depth, out),
        }
    }
}

macro_rules! impl_encodable_for_u {
	($name: ident) => {
		impl Encodable for $name {
			fn rlp_append(&self, out: &mut Vec<u8>) -> Result<(), Error> {
				let leading_empty_bytes = self.leading_zeros() as usize / 8;
				let buffer = self.to_be_bytes();
				append_bytes(&buffer[leading_empty_bytes..], out)
			}
		}
	};
}

impl_encodable_for_u!(u8);
impl_encodable_for_u!(u16);
impl_encodable_for_u!(u32);
impl_encodable_for_u!(u64);
impl_encodable_for_u!(u128);
impl_encodable_for_u!(usize);

macro_rules! impl_encodable_for_uint {
	($name: ident, $size: expr) => {
		impl Encodable for $name {
			fn rlp_append(&self, out: &mut Vec<u8>) -> Result<(), Error> {
				let leading_empty_bytes = self.leading_zeros() as usize / 8;
				let mut buffer = [0u8; $size];
				self.to_big_endian(&mut buffer);
				append_bytes(&buffer[leading_empty_bytes..], out)
			}
		}
	};
}

impl_encodable_for_uint!(U128, 16);
impl_encodable_for_uint!(U256, 32);
impl_encodable_for_uint!(U512, 64);
