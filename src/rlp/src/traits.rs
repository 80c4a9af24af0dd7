use crate::error::Error;
use crate::rlp::Encoder;

/// RLP encodable trait. Encode Self into bytes and append to end of `out`.
pub trait Encodable {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<(), Error>;

    /// Appends `self` as an element enclosed by `depth` lists. Only types that can
    /// hold lists of their own need the encoder's depth limit.
    fn rlp_append_nested(&self, _encoder: &Encoder, _depth: usize, out: &mut Vec<u8>) -> Result<(), Error> {
        self.rlp_append(out)
    }

    fn rlp_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut out = vec![];
        self.rlp_append(&mut out)?;
        Ok(out)
    }
}
