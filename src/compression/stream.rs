//! Byte cursor over compressed input.

use crate::{Error, Result};

/// Cursor over a compressed stream.
///
/// The decoders read input only through [`ByteStream::next_byte`], so
/// [`ByteStream::consumed`] is the exact compressed size once a stream ends.
#[derive(Debug, Clone)]
pub struct ByteStream<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteStream<'a> {
    /// Start reading at the first byte of `data`. The stream may extend to
    /// the end of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Read the next byte.
    ///
    /// Returns [`Error::InputExhausted`] once the bound is reached.
    #[inline]
    pub fn next_byte(&mut self) -> Result<u8> {
        let b = *self.data.get(self.pos).ok_or(Error::InputExhausted {
            consumed: self.pos,
        })?;
        self.pos += 1;
        Ok(b)
    }

    /// Read a big-endian `u16`.
    #[inline]
    pub fn next_be_u16(&mut self) -> Result<u16> {
        let hi = self.next_byte()?;
        let lo = self.next_byte()?;
        Ok(u16::from_be_bytes([hi, lo]))
    }

    /// Number of bytes read so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Returns `true` if no input remains.
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.data.len()
    }
}
