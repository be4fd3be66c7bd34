use anyhow::{anyhow, Result};
use derive_more::{Deref, From};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use std::any;
use std::io::{self, Read};
use std::mem;

#[derive(From, Deref, Clone, Copy)]
pub struct PresenceInt(u8);
impl From<Presence> for PresenceInt {
    fn from(presence: Presence) -> Self {
        let int = presence.to_u8().unwrap();
        Self(int)
    }
}
impl PresenceInt {
    pub fn deser(r: &mut impl Read) -> Result<(usize, Self), io::Error> {
        let mut buf = [0u8; mem::size_of::<u8>()];
        r.read_exact(&mut buf)?;
        let int = u8::from_le_bytes(buf);
        Ok((buf.len(), Self(int)))
    }
}

/// We manually pin the discriminants because the wire depends on them;
/// an automatic discriminant may change w/ enum definition change or
/// compilation, according to [`std::mem::discriminant()`] doc.
#[repr(u8)]
#[derive(PartialEq, Eq, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum Presence {
    Absent = 0,
    Present = 1,
}
impl TryFrom<PresenceInt> for Presence {
    type Error = anyhow::Error;
    fn try_from(int: PresenceInt) -> Result<Self> {
        Presence::from_u8(int.0).ok_or(anyhow!(
            "Unknown {} {}",
            any::type_name::<PresenceInt>(),
            int.0
        ))
    }
}
impl<T> From<&Option<T>> for Presence {
    fn from(opt: &Option<T>) -> Self {
        match opt {
            None => Presence::Absent,
            Some(_) => Presence::Present,
        }
    }
}
