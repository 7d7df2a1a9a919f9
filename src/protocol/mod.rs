//! Sample wire format
//!
//! Each channel carries an unbounded sequence of 4-byte frames, every frame a
//! little-endian IEEE-754 `f32`. There is no header, length prefix, delimiter
//! or heartbeat, so a stream cannot be resynchronized once framing is lost.

pub mod codec;
pub mod constants;

pub use codec::{decode_sample, encode_sample, ReadOutcome, SampleReader};
