//! LZ3 - Lunar Magic's extended graphics compression.
//!
//! Shares the header format of [`super::lz2`] but trades the increasing fill
//! for a zero fill and adds two repeat variants with a shorter offset form.
//!
//! ## Commands
//! ```text
//! 0  direct copy          N literal bytes follow
//! 1  byte fill            1 byte, repeated N times
//! 2  word fill            2 bytes, alternated for N bytes
//! 3  zero fill            no payload, N zero bytes
//! 4  repeat               offset, copy N bytes forward
//! 5  bit-reverse repeat   offset, copy N bytes forward with bits mirrored
//! 6  backwards repeat     offset, copy N bytes walking backward
//! ```
//!
//! ## Repeat offsets
//! ```text
//! 1ddddddd             relative: output_len - d - 1
//! 0hhhhhhh llllllll    absolute: h << 8 | l
//! ```

use super::{ByteStream, Decompressed, Dialect, copy_back_reference, fill_alternating, run};
use crate::{Error, Result};

/// LZ3 command kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Literal bytes.
    DirectCopy,
    /// One byte repeated.
    ByteFill,
    /// Two bytes alternated.
    WordFill,
    /// Zero bytes.
    ZeroFill,
    /// Copy forward from earlier output.
    Repeat,
    /// Copy forward, reversing the bit order of each byte.
    BitReverseRepeat,
    /// Copy backward from earlier output.
    BackwardsRepeat,
}

impl Dialect for Command {
    const NAME: &'static str = "LZ3";

    fn from_kind(kind: u8) -> Option<Self> {
        match kind {
            0 => Some(Self::DirectCopy),
            1 => Some(Self::ByteFill),
            2 => Some(Self::WordFill),
            3 => Some(Self::ZeroFill),
            4 => Some(Self::Repeat),
            5 => Some(Self::BitReverseRepeat),
            6 => Some(Self::BackwardsRepeat),
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
            Self::ZeroFill => out.resize(out.len() + len, 0),
            Self::Repeat => {
                let start = repeat_offset(stream, out.len())?;
                copy_back_reference(out, start, len, 1, |b| b)?;
            }
            Self::BitReverseRepeat => {
                let start = repeat_offset(stream, out.len())?;
                copy_back_reference(out, start, len, 1, u8::reverse_bits)?;
            }
            Self::BackwardsRepeat => {
                let start = repeat_offset(stream, out.len())?;
                copy_back_reference(out, start, len, -1, |b| b)?;
            }
        }
        Ok(())
    }
}

/// Read a repeat offset and resolve it to an absolute output position.
fn repeat_offset(stream: &mut ByteStream<'_>, produced: usize) -> Result<usize> {
    let first = stream.next_byte()?;
    if first & 0x80 != 0 {
        let distance = (first & 0x7F) as usize + 1;
        produced
            .checked_sub(distance)
            .ok_or(Error::InvalidBackReference {
                available: produced,
            })
    } else {
        let low = stream.next_byte()?;
        Ok(((first as usize) << 8) | low as usize)
    }
}

/// Decompress an LZ3 stream starting at the first byte of `input`.
pub fn decompress(input: &[u8]) -> Result<Decompressed> {
    run::<Command>(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_stream_only() {
        let d = decompress(&[0xFF]).unwrap();
        assert!(d.data.is_empty());
        assert_eq!(d.compressed_size, 1);
        assert_eq!(d.decompressed_size, 0);
    }

    #[test]
    fn shared_fills() {
        let d = decompress(&[0x00, 0x42, 0x21, 0x07, 0x42, 0xAB, 0xCD, 0xFF]).unwrap();
        assert_eq!(d.data, [0x42, 0x07, 0x07, 0xAB, 0xCD, 0xAB]);
        assert_eq!(d.compressed_size, 8);
    }

    #[test]
    fn zero_fill_has_no_payload() {
        let d = decompress(&[0x63, 0xFF]).unwrap();
        assert_eq!(d.data, [0, 0, 0, 0]);
        assert_eq!(d.compressed_size, 2);
    }

    #[test]
    fn relative_repeat() {
        let d = decompress(&[0x02, 1, 2, 3, 0x81, 0x82, 0xFF]).unwrap();
        assert_eq!(d.data, [1, 2, 3, 1, 2]);
        assert_eq!(d.compressed_size, 7);
    }

    #[test]
    fn absolute_repeat_overlaps_its_own_output() {
        let d = decompress(&[0x00, 0xAA, 0x82, 0x00, 0x00, 0xFF]).unwrap();
        assert_eq!(d.data, [0xAA, 0xAA, 0xAA, 0xAA]);
    }

    #[test]
    fn absolute_offsets_use_fifteen_bits() {
        let mut input = vec![0xE1, 0x01];
        input.extend((0..0x102).map(|i| i as u8));
        input.extend([0x80, 0x01, 0x01, 0xFF]);
        let d = decompress(&input).unwrap();
        assert_eq!(&d.data[0x102..], [0x01]);
    }

    #[test]
    fn bit_reverse_repeat() {
        let d = decompress(&[0x01, 0b1000_0001, 0b0000_0001, 0xA1, 0x00, 0x00, 0xFF]).unwrap();
        assert_eq!(d.data, [0x81, 0x01, 0b1000_0001, 0b1000_0000]);
    }

    #[test_log::test]
    fn backwards_repeat_mirrors_the_run() {
        let d = decompress(&[0x02, 1, 2, 3, 0xC2, 0x80, 0xFF]).unwrap();
        assert_eq!(d.data, [1, 2, 3, 3, 2, 1]);
    }

    #[test]
    fn backwards_repeat_cannot_pass_output_start() {
        assert!(matches!(
            decompress(&[0x00, 1, 0xC2, 0x80, 0xFF]),
            Err(Error::InvalidBackReference { .. })
        ));
    }

    #[test]
    fn relative_offset_before_output_start() {
        assert!(matches!(
            decompress(&[0x00, 1, 0x80, 0x81, 0xFF]),
            Err(Error::InvalidBackReference { available: 1 })
        ));
    }

    #[test]
    fn long_form_kind_seven_is_rejected() {
        assert!(matches!(
            decompress(&[0xFC, 0x00, 0xFF]),
            Err(Error::UnrecognizedCommand { kind: 7, offset: 0 })
        ));
    }

    #[test]
    fn truncated_direct_copy() {
        assert!(matches!(
            decompress(&[0x09, 1, 2, 3]),
            Err(Error::InputExhausted { consumed: 4 })
        ));
    }

    #[test]
    fn truncated_absolute_offset() {
        assert!(matches!(
            decompress(&[0x00, 1, 0x80, 0x00]),
            Err(Error::InputExhausted { consumed: 4 })
        ));
    }
}
