//! Borrowed view of an unheadered ROM image.
//!
//! [`Rom`] pairs the image bytes with the [`Mapping`] detected from its
//! internal header, so table lookups translate SNES addresses without
//! re-reading the header each time. The bytes are never copied or mutated.
//!
//! Multi-byte reads translate the starting address once and then read
//! consecutive PC bytes, the way the game's own table layout assumes.

pub mod address;
pub mod header;

use crate::utils::{bytes_at, le_u16_at, le_u24_at, u8_at};
use crate::{Error, Result};
use header::strip_copier_header;

pub use address::{Mapping, pc_to_snes, snes_to_pc, uses_sa1};

/// An unheadered ROM image and its address mapping.
#[derive(Debug, Clone, Copy)]
pub struct Rom<'a> {
    data: &'a [u8],
    mapping: Mapping,
}

impl<'a> Rom<'a> {
    /// Wrap an unheadered image, detecting its mapping.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let mapping = Mapping::detect(data)?;
        Ok(Self { data, mapping })
    }

    /// Wrap a raw dump, stripping a copier header if one is present.
    pub fn from_dump(data: &'a [u8]) -> Result<Self> {
        Self::new(strip_copier_header(data)?)
    }

    /// The unheadered image bytes.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Image length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the image holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The detected address mapping.
    pub fn mapping(&self) -> Mapping {
        self.mapping
    }

    /// Returns `true` for SA-1 cartridges.
    pub fn uses_sa1(&self) -> bool {
        self.mapping == Mapping::Sa1
    }

    /// Translate a SNES address to a PC offset inside this image.
    pub fn to_pc(&self, addr: u32) -> Result<usize> {
        let offset = self.mapping.to_pc(addr)?;
        if offset >= self.data.len() {
            return Err(Error::AddressOutOfBounds {
                offset,
                len: self.data.len(),
            });
        }
        Ok(offset)
    }

    /// Translate a PC offset inside this image to its canonical SNES address.
    pub fn to_snes(&self, offset: usize) -> Result<u32> {
        if offset >= self.data.len() {
            return Err(Error::AddressOutOfBounds {
                offset,
                len: self.data.len(),
            });
        }
        self.mapping.to_snes(offset)
    }

    /// Read a byte at a SNES address.
    pub fn read_u8(&self, addr: u32) -> Result<u8> {
        u8_at(self.data, self.to_pc(addr)?)
    }

    /// Read a little-endian word at a SNES address.
    pub fn read_u16(&self, addr: u32) -> Result<u16> {
        le_u16_at(self.data, self.to_pc(addr)?)
    }

    /// Read a little-endian 24-bit long pointer at a SNES address.
    pub fn read_u24(&self, addr: u32) -> Result<u32> {
        le_u24_at(self.data, self.to_pc(addr)?)
    }

    /// Read `N` consecutive bytes starting at a SNES address.
    pub fn read_array<const N: usize>(&self, addr: u32) -> Result<[u8; N]> {
        bytes_at(self.data, self.to_pc(addr)?)
    }

    /// Everything from a SNES address to the end of the image.
    ///
    /// Compressed streams carry no length, so decoders are handed this tail.
    pub fn slice_from(&self, addr: u32) -> Result<&'a [u8]> {
        Ok(&self.data[self.to_pc(addr)?..])
    }

    /// `len` bytes starting at a PC offset.
    pub fn slice_pc(&self, offset: usize, len: usize) -> Result<&'a [u8]> {
        let end = offset.saturating_add(len);
        self.data.get(offset..end).ok_or(Error::AddressOutOfBounds {
            offset: end.saturating_sub(1),
            len: self.data.len(),
        })
    }
}
