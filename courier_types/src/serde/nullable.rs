use crate::serde::{Codec, Presence, PresenceInt, WriteLen};
use anyhow::Result;
use std::io::{Read, Seek, Write};

/// Wraps any codec into a codec for "value or absent".
///
/// A one-byte presence flag precedes the value; an absent value writes the
/// flag alone, and the inner codec is never touched. Absence is therefore
/// distinct from any present value, including an empty one.
#[derive(Clone, Copy, Default)]
pub struct NullableCodec<C> {
    inner: C,
}

impl<C> NullableCodec<C> {
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Codec> Codec for NullableCodec<C> {
    type Value = Option<C::Value>;

    fn encode<W: Write>(&self, value: &Self::Value, w: &mut W) -> Result<WriteLen> {
        let mut w_len = 0;

        /* presence */
        let presence = PresenceInt::from(Presence::from(value));
        w_len += w.write(&presence.to_le_bytes())?;

        /* value */
        if let Some(value) = value {
            w_len += *self.inner.encode(value, w)?;
        }

        Ok(WriteLen::new_manual(w_len))
    }

    fn decode<R: Read>(&self, r: &mut R) -> Result<(usize, Self::Value)> {
        let (mut r_len, presence_int) = PresenceInt::deser(r)?;
        let opt = match Presence::try_from(presence_int)? {
            Presence::Absent => None,
            Presence::Present => {
                let (delta_r_len, value) = self.inner.decode(r)?;
                r_len += delta_r_len;
                Some(value)
            }
        };
        Ok((r_len, opt))
    }

    fn skip<R: Read + Seek>(&self, r: &mut R) -> Result<usize> {
        let (mut r_len, presence_int) = PresenceInt::deser(r)?;
        match Presence::try_from(presence_int)? {
            Presence::Absent => {}
            Presence::Present => {
                r_len += self.inner.skip(r)?;
            }
        }
        Ok(r_len)
    }
}
