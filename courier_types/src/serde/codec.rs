use anyhow::Result;
use derive_more::Deref;
use std::io::{Cursor, Read, Seek, Write};

#[derive(Deref)]
pub struct WriteLen(usize);
impl WriteLen {
    pub fn new_manual(i: usize) -> Self {
        Self(i)
    }
}

/// A paired encode/decode capability for one value type.
///
/// Codec values hold no mutable state. Construct one instance, then share it
/// across calls and threads; each call borrows its stream exclusively, so a
/// stream is never advanced by two calls at once.
pub trait Codec {
    type Value;

    fn encode<W: Write>(&self, value: &Self::Value, w: &mut W) -> Result<WriteLen>;

    /// Returns the consumed byte count alongside the decoded value.
    ///
    /// On failure, the stream position is undefined and the stream must not
    /// be reused.
    fn decode<R: Read>(&self, r: &mut R) -> Result<(usize, Self::Value)>;

    /// Advances past one encoded value without materializing it.
    /// Skipping does not validate text encoding.
    fn skip<R: Read + Seek>(&self, r: &mut R) -> Result<usize>;

    fn encode_to_vec(&self, value: &Self::Value) -> Result<Vec<u8>> {
        let mut buf = vec![];
        self.encode(value, &mut buf)?;
        Ok(buf)
    }

    fn decode_solo(&self, buf: &[u8]) -> Result<Self::Value> {
        let mut r = Cursor::new(buf);
        let (_, value) = self.decode(&mut r)?;
        Ok(value)
    }
}
