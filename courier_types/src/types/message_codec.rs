use crate::serde::{ByteSeqCodec, Codec, MapCodec, NullableCodec, Utf8Codec, WriteLen};
use crate::types::Message;
use anyhow::Result;
use std::io::{Read, Seek, Write};

type AttributesCodec = NullableCodec<MapCodec<Utf8Codec, Utf8Codec>>;

/// The composite codec for [`Message`].
///
/// Field order on the wire is fixed: payload, attributes, message_id, topic.
/// Reordering the fields breaks compatibility w/ all previously encoded
/// data.
///
/// ```text
/// struct Message {
///     payload:        ByteSeq,
///     attributes:     Nullable<Map<Utf8, Utf8>>,
///     message_id:     Nullable<Utf8>,
///     topic:          Nullable<Utf8>,
/// }
/// ```
#[derive(Clone, Copy, Default)]
pub struct MessageCodec {
    payload: ByteSeqCodec,
    attributes: AttributesCodec,
    message_id: NullableCodec<Utf8Codec>,
    topic: NullableCodec<Utf8Codec>,
}

impl MessageCodec {
    pub const fn new() -> Self {
        Self {
            payload: ByteSeqCodec,
            attributes: NullableCodec::new(MapCodec::new(Utf8Codec, Utf8Codec)),
            message_id: NullableCodec::new(Utf8Codec),
            topic: NullableCodec::new(Utf8Codec),
        }
    }
}

impl Codec for MessageCodec {
    type Value = Message;

    fn encode<W: Write>(&self, value: &Message, w: &mut W) -> Result<WriteLen> {
        let mut w_len = 0;
        w_len += *self.payload.encode(&value.payload, w)?;
        w_len += *self.attributes.encode(&value.attributes, w)?;
        w_len += *self.message_id.encode(&value.message_id, w)?;
        w_len += *self.topic.encode(&value.topic, w)?;
        Ok(WriteLen::new_manual(w_len))
    }

    fn decode<R: Read>(&self, r: &mut R) -> Result<(usize, Message)> {
        let (payload_r_len, payload) = self.payload.decode(r)?;
        let (attributes_r_len, attributes) = self.attributes.decode(r)?;
        let (message_id_r_len, message_id) = self.message_id.decode(r)?;
        let (topic_r_len, topic) = self.topic.decode(r)?;

        let r_len = payload_r_len + attributes_r_len + message_id_r_len + topic_r_len;
        let msg = Message {
            payload,
            attributes,
            message_id,
            topic,
        };
        Ok((r_len, msg))
    }

    fn skip<R: Read + Seek>(&self, r: &mut R) -> Result<usize> {
        let mut r_len = 0;
        r_len += self.payload.skip(r)?;
        r_len += self.attributes.skip(r)?;
        r_len += self.message_id.skip(r)?;
        r_len += self.topic.skip(r)?;
        Ok(r_len)
    }
}
