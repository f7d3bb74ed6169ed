//! Lunar Magic graphics decompression.
//!
//! Graphics in an edited ROM are stored in one of two LZ dialects, chosen
//! ROM-wide by the selector byte at [`crate::layout::COMPRESSION_FORMAT`]:
//!
//! | Selector | Format   | Module  |
//! |----------|----------|---------|
//! | `0`, `1` | LZ2      | [`lz2`] |
//! | `2`      | LZ3      | [`lz3`] |
//!
//! ## Stream layout
//! Both dialects share the same command header; only the meaning of the
//! command kinds differs.
//! ```text
//! 111 11111                    end of stream
//! kkk lllll                    short form: kind k, length l + 1 (1-32)
//! 111 kkk ll  llllllll         long form:  kind k, length l + 1 (1-1024)
//! ```
//! A stream also ends cleanly when the input runs out exactly at a command
//! boundary. Running out inside a command is an error.
//!
//! Compressed streams carry no length of their own, so callers hand the
//! decoders everything from the stream start to the end of the ROM and read
//! the real size back from [`Decompressed::compressed_size`].

pub mod lz2;
pub mod lz3;
mod stream;

pub use stream::ByteStream;

use log::{debug, trace};

use crate::{Error, Result};

/// Header byte marking the end of a stream.
pub const END_OF_STREAM: u8 = 0xFF;

/// Compression dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// The compression used by the original game.
    Lz2,
    /// Lunar Magic's extended dialect.
    Lz3,
}

impl Format {
    /// Map the ROM-wide selector byte to a format.
    pub fn from_selector(selector: u8) -> Result<Self> {
        match selector {
            0 | 1 => Ok(Self::Lz2),
            2 => Ok(Self::Lz3),
            other => Err(Error::UnrecognizedFormat(other)),
        }
    }
}

/// Output of a successful decode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decompressed {
    /// The decoded bytes.
    pub data: Vec<u8>,
    /// Input bytes consumed, end-of-stream byte included.
    pub compressed_size: usize,
    /// Length of [`Decompressed::data`].
    pub decompressed_size: usize,
}

/// Decompress a stream in the given format.
pub fn decompress(format: Format, input: &[u8]) -> Result<Decompressed> {
    match format {
        Format::Lz2 => lz2::decompress(input),
        Format::Lz3 => lz3::decompress(input),
    }
}

/// A decoded command header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Header {
    kind: u8,
    len: usize,
}

/// Read the next command header, or `None` at the end of the stream.
fn next_header(stream: &mut ByteStream<'_>) -> Result<Option<Header>> {
    if stream.is_exhausted() {
        return Ok(None);
    }

    let first = stream.next_byte()?;
    if first == END_OF_STREAM {
        return Ok(None);
    }

    let kind = first >> 5;
    let header = if kind == 7 {
        let second = stream.next_byte()?;
        Header {
            kind: (first >> 2) & 0x07,
            len: ((((first & 0x03) as usize) << 8) | second as usize) + 1,
        }
    } else {
        Header {
            kind,
            len: (first & 0x1F) as usize + 1,
        }
    };
    Ok(Some(header))
}

/// The command set of one dialect.
trait Dialect: Sized + std::fmt::Debug {
    const NAME: &'static str;

    /// Map a 3-bit kind to a command, `None` for kinds the dialect lacks.
    fn from_kind(kind: u8) -> Option<Self>;

    /// Read the command's payload and append `len` output units.
    fn execute(&self, len: usize, stream: &mut ByteStream<'_>, out: &mut Vec<u8>) -> Result<()>;
}

/// Shared command loop.
fn run<D: Dialect>(input: &[u8]) -> Result<Decompressed> {
    let mut stream = ByteStream::new(input);
    let mut out = Vec::new();

    loop {
        let offset = stream.consumed();
        let Some(header) = next_header(&mut stream)? else {
            break;
        };
        let command = D::from_kind(header.kind).ok_or(Error::UnrecognizedCommand {
            kind: header.kind,
            offset,
        })?;
        trace!("{} {offset:#06X}: {command:?} x{}", D::NAME, header.len);
        command.execute(header.len, &mut stream, &mut out)?;
    }

    debug!(
        "{}: {} compressed bytes -> {} bytes",
        D::NAME,
        stream.consumed(),
        out.len()
    );
    Ok(Decompressed {
        compressed_size: stream.consumed(),
        decompressed_size: out.len(),
        data: out,
    })
}

/// Append `len` bytes read one at a time from already-decoded output.
///
/// Reads start at `start` and move forward (`step = 1`) or backward
/// (`step = -1`). Forward reads may reach bytes appended by this same call,
/// which is how short runs expand into repeating patterns.
fn copy_back_reference(
    out: &mut Vec<u8>,
    start: usize,
    len: usize,
    step: isize,
    map: impl Fn(u8) -> u8,
) -> Result<()> {
    let mut src = start;
    for i in 0..len {
        let b = *out.get(src).ok_or(Error::InvalidBackReference {
            available: out.len(),
        })?;
        out.push(map(b));
        if i + 1 < len {
            src = src.checked_add_signed(step).ok_or(Error::InvalidBackReference {
                available: out.len(),
            })?;
        }
    }
    Ok(())
}

/// Append `len` bytes alternating between `a` and `b`, starting with `a`.
fn fill_alternating(out: &mut Vec<u8>, a: u8, b: u8, len: usize) {
    out.extend([a, b].iter().copied().cycle().take(len));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_routing() {
        assert_eq!(Format::from_selector(0).unwrap(), Format::Lz2);
        assert_eq!(Format::from_selector(1).unwrap(), Format::Lz2);
        assert_eq!(Format::from_selector(2).unwrap(), Format::Lz3);
        for selector in [3, 0x80, 0xFF] {
            assert!(matches!(
                Format::from_selector(selector),
                Err(Error::UnrecognizedFormat(s)) if s == selector
            ));
        }
    }

    #[test]
    fn short_and_long_headers() {
        let mut s = ByteStream::new(&[0x00, 0x3F, 0xE5, 0x00, 0xFF]);
        assert_eq!(next_header(&mut s).unwrap(), Some(Header { kind: 0, len: 1 }));
        assert_eq!(next_header(&mut s).unwrap(), Some(Header { kind: 1, len: 32 }));
        assert_eq!(next_header(&mut s).unwrap(), Some(Header { kind: 1, len: 257 }));
        assert_eq!(next_header(&mut s).unwrap(), None);
        assert_eq!(s.consumed(), 5);
    }

    #[test]
    fn longest_run_is_1024() {
        let mut s = ByteStream::new(&[0xE3, 0xFF]);
        assert_eq!(next_header(&mut s).unwrap(), Some(Header { kind: 0, len: 1024 }));
    }

    #[test]
    fn long_header_needs_its_second_byte() {
        let mut s = ByteStream::new(&[0xE4]);
        assert!(matches!(
            next_header(&mut s),
            Err(Error::InputExhausted { consumed: 1 })
        ));
    }

    #[test]
    fn overlapping_copy_repeats_pattern() {
        let mut out = vec![1, 2];
        copy_back_reference(&mut out, 0, 5, 1, |b| b).unwrap();
        assert_eq!(out, [1, 2, 1, 2, 1, 2, 1]);
    }

    #[test]
    fn backward_copy_stops_at_output_start() {
        let mut out = vec![1, 2];
        copy_back_reference(&mut out, 1, 2, -1, |b| b).unwrap();
        assert_eq!(out, [1, 2, 2, 1]);

        let mut out = vec![1, 2];
        assert!(matches!(
            copy_back_reference(&mut out, 1, 3, -1, |b| b),
            Err(Error::InvalidBackReference { .. })
        ));
    }

    #[test]
    fn alternating_fill_odd_length() {
        let mut out = Vec::new();
        fill_alternating(&mut out, 0x12, 0x34, 5);
        assert_eq!(out, [0x12, 0x34, 0x12, 0x34, 0x12]);
    }
}
