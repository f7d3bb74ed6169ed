//! Library-wide error and result types.

use std::io;

/// Result alias used throughout smwkit.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the library can produce.
///
/// Every failure aborts the whole call; no operation returns partial output
/// alongside an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A compressed stream ended in the middle of a command.
    #[error("compressed input exhausted after {consumed} bytes")]
    InputExhausted {
        /// Bytes consumed before the failed read.
        consumed: usize,
    },
    /// A command header selected a kind the dialect does not define.
    #[error("unrecognized command {kind} at input offset {offset:#X}")]
    UnrecognizedCommand {
        /// The 3-bit command kind.
        kind: u8,
        /// Offset of the header byte within the compressed input.
        offset: usize,
    },
    /// A repeat command pointed outside the output produced so far.
    #[error("back-reference outside decoded output ({available} bytes produced)")]
    InvalidBackReference {
        /// Output length at the time of the failed read.
        available: usize,
    },
    /// The SNES address lies outside the ROM-mapped part of the address space.
    #[error("SNES address ${0:06X} cannot be mapped to a ROM offset")]
    AddressUnmappable(u32),
    /// The PC offset cannot be expressed as a LoROM address.
    #[error("PC offset {0:#X} cannot be mapped to a SNES address")]
    OffsetUnmappable(usize),
    /// A read would land past the end of the ROM image.
    #[error("offset {offset:#X} is out of bounds for a {len:#X}-byte ROM")]
    AddressOutOfBounds {
        /// Requested PC offset.
        offset: usize,
        /// ROM length.
        len: usize,
    },
    /// The graphics file index is invalid or its table entry is empty.
    #[error("graphics file {0:#X} does not exist")]
    FileNotFound(u16),
    /// The ROM-wide compression selector byte holds an unknown value.
    #[error("unrecognized compression format {0:#04X}")]
    UnrecognizedFormat(u8),
    /// The image size matches neither a headered nor an unheadered dump.
    #[error("cannot tell whether a {0:#X}-byte image carries a copier header")]
    UnknownHeaderLayout(usize),
    /// Level numbers run from 0 to 0x1FF.
    #[error("level {0:#X} does not exist")]
    InvalidLevel(u16),
    /// Graphics slot indices run from 0 to 10.
    #[error("graphics slot {0} does not exist")]
    InvalidSlot(usize),
    /// An underlying I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
