//! Frame codec
//!
//! [`decode_sample`] turns exactly one frame into a sample. [`SampleReader`]
//! pulls bytes off a socket and yields every frame in arrival order.
//!
//! Read boundaries are frame boundaries. A read that ends 1-3 bytes into a
//! frame is a [`FramingError`]: those bytes are dropped undecoded and never
//! completed by a later read.

use bytes::{Buf, BufMut, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::{FramingError, Result};
use crate::protocol::constants::{DEFAULT_READ_BUFFER_SIZE, SAMPLE_SIZE};

/// Decode one frame
///
/// Only a slice of exactly [`SAMPLE_SIZE`] bytes is a valid frame.
pub fn decode_sample(frame: &[u8]) -> std::result::Result<f32, FramingError> {
    if frame.len() != SAMPLE_SIZE {
        return Err(FramingError { len: frame.len() });
    }
    let mut frame = frame;
    Ok(frame.get_f32_le())
}

/// Encode one sample as a frame
pub fn encode_sample(sample: f32, buf: &mut BytesMut) {
    buf.put_f32_le(sample);
}

/// Result of one [`SampleReader::read_batch`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// This many samples were appended to the output
    Samples(usize),
    /// Peer closed the connection on a frame boundary
    Closed,
}

/// Reads frames from a byte stream
pub struct SampleReader<R> {
    reader: R,
    buf: BytesMut,
    read_size: usize,
    /// Framing error seen after the frames of the last batch
    failed: Option<FramingError>,
}

impl<R: AsyncRead + Unpin> SampleReader<R> {
    /// Create a reader with the default read buffer size
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, DEFAULT_READ_BUFFER_SIZE)
    }

    /// Create a reader with a custom read buffer size
    ///
    /// The size is rounded down to whole frames, so a full buffer never
    /// cuts a frame in two.
    pub fn with_capacity(reader: R, read_size: usize) -> Self {
        let read_size = (read_size / SAMPLE_SIZE).max(1) * SAMPLE_SIZE;
        Self {
            reader,
            buf: BytesMut::with_capacity(read_size),
            read_size,
            failed: None,
        }
    }

    /// Perform one read and decode every frame it returned into `out`
    ///
    /// When the read ends inside a frame, the whole frames before it are
    /// still returned and the next call fails with the [`FramingError`].
    pub async fn read_batch(&mut self, out: &mut Vec<f32>) -> Result<ReadOutcome> {
        if let Some(err) = self.failed.take() {
            return Err(err.into());
        }

        self.buf.clear();
        self.buf.resize(self.read_size, 0);
        let n = self.reader.read(&mut self.buf[..]).await?;
        self.buf.truncate(n);
        if n == 0 {
            return Ok(ReadOutcome::Closed);
        }

        let decoded = self.decode_frames(out)?;
        if let Some(err) = self.failed.take() {
            if decoded == 0 {
                return Err(err.into());
            }
            self.failed = Some(err);
        }
        Ok(ReadOutcome::Samples(decoded))
    }

    fn decode_frames(&mut self, out: &mut Vec<f32>) -> std::result::Result<usize, FramingError> {
        let chunks = self.buf.chunks_exact(SAMPLE_SIZE);
        let remainder = chunks.remainder().len();
        out.reserve(chunks.len());

        let mut decoded = 0;
        for frame in chunks {
            out.push(decode_sample(frame)?);
            decoded += 1;
        }

        self.buf.clear();
        if remainder > 0 {
            self.failed = Some(FramingError { len: remainder });
        }
        Ok(decoded)
    }
}
