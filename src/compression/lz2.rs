//! LZ2 - the graphics compression of the original game.
//!
//! ## Commands
//! ```text
//! 0  direct copy      N literal bytes follow
//! 1  byte fill        1 byte, repeated N times
//! 2  word fill        2 bytes, alternated for N bytes
//! 3  increasing fill  1 byte, incremented (mod 256) after each of N bytes
//! 4  repeat           u16 BE absolute output offset, copy N bytes forward
//! 5, 6                unused
//! ```
//! `N` is the header length field plus one. A repeat may overlap the bytes it
//! is producing; they are copied one at a time so the overlap repeats.

use super::{ByteStream, Decompressed, Dialect, copy_back_reference, fill_alternating, run};
use crate::Result;

/// LZ2 command kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Literal bytes.
    DirectCopy,
    /// One byte repeated.
    ByteFill,
    /// Two bytes alternated.
    WordFill,
    /// One byte, incremented per output byte.
    IncreasingFill,
    /// Copy from an absolute output offset.
    Repeat,
}

impl Dialect for Command {
    const NAME: &'static str = "LZ2";

    fn from_kind(kind: u8) -> Option<Self> {
        match kind {
            0 => Some(Self::DirectCopy),
            1 => Some(Self::ByteFill),
            2 => Some(Self::WordFill),
            3 => Some(Self::IncreasingFill),
            4 => Some(Self::Repeat),
            _ => None,
        }
    }

    fn execute(&self, len: usize, stream: &mut ByteStream<'_>, out: &mut Vec<u8>) -> Result<()> {
        match self {
            Self::DirectCopy => {
                for _ in 0..len {
                    out.push(stream.next_byte()?);
                }
            }
            Self::ByteFill => {
                let b = stream.next_byte()?;
                out.resize(out.len() + len, b);
            }
            Self::WordFill => {
                let a = stream.next_byte()?;
                let b = stream.next_byte()?;
                fill_alternating(out, a, b, len);
            }
            Self::IncreasingFill => {
                let mut b = stream.next_byte()?;
                for _ in 0..len {
                    out.push(b);
                    b = b.wrapping_add(1);
                }
            }
            Self::Repeat => {
                let offset = stream.next_be_u16()? as usize;
                copy_back_reference(out, offset, len, 1, |b| b)?;
            }
        }
        Ok(())
    }
}

/// Decompress an LZ2 stream starting at the first byte of `input`.
pub fn decompress(input: &[u8]) -> Result<Decompressed> {
    run::<Command>(input)
}
