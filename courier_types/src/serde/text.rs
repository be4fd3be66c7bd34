use crate::serde::{ByteSeqCodec, Codec, WriteLen};
use anyhow::Result;
use std::io::{Read, Seek, Write};

/// UTF-8 text codec. The text is UTF-8-encoded, then written as a
/// length-prefixed byte sequence.
#[derive(Clone, Copy, Default)]
pub struct Utf8Codec;

impl Codec for Utf8Codec {
    type Value = String;

    fn encode<W: Write>(&self, value: &String, w: &mut W) -> Result<WriteLen> {
        ByteSeqCodec.encode_body(value.as_bytes(), w)
    }

    fn decode<R: Read>(&self, r: &mut R) -> Result<(usize, String)> {
        let (r_len, body) = ByteSeqCodec.decode_body(r)?;
        let s = String::from_utf8(body)?;
        Ok((r_len, s))
    }

    fn skip<R: Read + Seek>(&self, r: &mut R) -> Result<usize> {
        ByteSeqCodec.skip(r)
    }
}
