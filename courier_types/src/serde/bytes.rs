use crate::serde::{BodyLen, Codec, WriteLen};
use anyhow::Result;
use std::io::{Read, Seek, SeekFrom, Write};

/// Length-prefixed byte sequence codec.
///
/// An empty body is a valid value; it serializes as a zero length prefix and
/// nothing else.
#[derive(Clone, Copy, Default)]
pub struct ByteSeqCodec;

impl ByteSeqCodec {
    pub(crate) fn encode_body<W: Write>(&self, body: &[u8], w: &mut W) -> Result<WriteLen> {
        let mut w_len = 0;

        let body_len = BodyLen::from_body(body)?;
        w_len += w.write(&body_len.to_le_bytes())?;
        w_len += w.write(body)?;

        Ok(WriteLen::new_manual(w_len))
    }

    pub(crate) fn decode_body<R: Read>(&self, r: &mut R) -> Result<(usize, Vec<u8>)> {
        let (mut r_len, body_len) = BodyLen::deser(r)?;

        let mut buf = vec![0u8; *body_len as usize];
        r.read_exact(&mut buf)?;
        r_len += buf.len();

        Ok((r_len, buf))
    }
}

impl Codec for ByteSeqCodec {
    type Value = Vec<u8>;

    fn encode<W: Write>(&self, value: &Vec<u8>, w: &mut W) -> Result<WriteLen> {
        self.encode_body(value, w)
    }

    fn decode<R: Read>(&self, r: &mut R) -> Result<(usize, Vec<u8>)> {
        self.decode_body(r)
    }

    fn skip<R: Read + Seek>(&self, r: &mut R) -> Result<usize> {
        let (mut r_len, body_len) = BodyLen::deser(r)?;
        r.seek(SeekFrom::Current(*body_len as i64))?;
        r_len += *body_len as usize;
        Ok(r_len)
    }
}
