mod message;
mod message_codec;
mod message_test;

pub use message::*;
pub use message_codec::*;
