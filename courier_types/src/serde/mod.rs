//! # Wire format
//!
//! Every de/serializable type is written through a [`Codec`], a stateless
//! paired encode/decode capability.
//!
//! All length and count prefixes are encoded in `u32`, little-endian.
//! Nullable fields are preceded by a one-byte presence flag.
//! There is no padding, no magic header, and no version tag; producer and
//! consumer must agree on the field schema out of band. Any change to a
//! field sequence is a breaking format change.
//!
//! The below pseudocode depicts the serialized representations of the
//! building blocks.
//!
//! ```text
//! struct ByteSeq {
//!     body_len:       u32,
//!     body:           [u8; body_len],
//! }
//!
//! struct Utf8 {
//!     body_len:       u32,
//!     body:           [u8; body_len],    // valid UTF-8
//! }
//!
//! struct Nullable<T> {
//!     presence:       u8,                // 0 = absent, 1 = present
//!     value:          T,                 // only if presence == 1
//! }
//!
//! struct Map<K, V> {
//!     entry_count:    u32,
//!     entries:        [{ key: K, value: V }; entry_count],
//! }
//! ```

mod bytes;
mod codec;
mod lengths;
mod mapping;
mod nullable;
mod presence;
mod text;

pub use bytes::*;
pub use codec::*;
pub use mapping::*;
pub use nullable::*;
pub use presence::*;
pub use text::*;
use lengths::*;
