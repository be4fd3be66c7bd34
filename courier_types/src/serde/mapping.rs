use crate::serde::{Codec, EntryCount, WriteLen};
use anyhow::Result;
use std::collections::BTreeMap;
use std::io::{Read, Seek, Write};

/// Mapping codec: an entry count, then each key/value pair via the key and
/// value codecs, in the mapping's iteration order.
///
/// `BTreeMap` iterates in key order, so structurally equal mappings always
/// serialize to identical bytes. Duplicate keys on the wire resolve
/// last-write-wins, per ordinary mapping insertion.
#[derive(Clone, Copy, Default)]
pub struct MapCodec<KC, VC> {
    key: KC,
    value: VC,
}

impl<KC, VC> MapCodec<KC, VC> {
    pub const fn new(key: KC, value: VC) -> Self {
        Self { key, value }
    }
}

impl<KC, VC> Codec for MapCodec<KC, VC>
where
    KC: Codec,
    VC: Codec,
    KC::Value: Ord,
{
    type Value = BTreeMap<KC::Value, VC::Value>;

    fn encode<W: Write>(&self, value: &Self::Value, w: &mut W) -> Result<WriteLen> {
        let mut w_len = 0;

        /* entry_count */
        let count = EntryCount::from_len(value.len())?;
        w_len += w.write(&count.to_le_bytes())?;

        /* entries */
        for (k, v) in value {
            w_len += *self.key.encode(k, w)?;
            w_len += *self.value.encode(v, w)?;
        }

        Ok(WriteLen::new_manual(w_len))
    }

    fn decode<R: Read>(&self, r: &mut R) -> Result<(usize, Self::Value)> {
        /* entry_count */
        let (mut r_len, count) = EntryCount::deser(r)?;

        /* entries */
        let mut map = BTreeMap::new();
        for _ in 0..*count {
            let (k_r_len, k) = self.key.decode(r)?;
            let (v_r_len, v) = self.value.decode(r)?;
            r_len += k_r_len + v_r_len;
            map.insert(k, v);
        }

        Ok((r_len, map))
    }

    fn skip<R: Read + Seek>(&self, r: &mut R) -> Result<usize> {
        let (mut r_len, count) = EntryCount::deser(r)?;
        for _ in 0..*count {
            r_len += self.key.skip(r)?;
            r_len += self.value.skip(r)?;
        }
        Ok(r_len)
    }
}
