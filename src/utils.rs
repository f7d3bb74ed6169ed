//! Low-level read primitives shared by all ROM lookups.
//!
//! Each function reads exactly the bytes it promises or returns an error -
//! there is no partial-read ambiguity. Offsets are PC offsets into an
//! unheadered image; multi-byte values are little-endian as on the SNES.

use crate::{Error, Result};

/// Read one byte at `offset`.
#[inline]
pub(crate) fn u8_at(buf: &[u8], offset: usize) -> Result<u8> {
    buf.get(offset).copied().ok_or(Error::AddressOutOfBounds {
        offset,
        len: buf.len(),
    })
}

/// Read a little-endian `u16` at `offset`.
#[inline]
pub(crate) fn le_u16_at(buf: &[u8], offset: usize) -> Result<u16> {
    let b = bytes_at::<2>(buf, offset)?;
    Ok(u16::from_le_bytes(b))
}

/// Read a little-endian 24-bit value at `offset`.
#[inline]
pub(crate) fn le_u24_at(buf: &[u8], offset: usize) -> Result<u32> {
    let [lo, hi, bank] = bytes_at::<3>(buf, offset)?;
    Ok(u32::from_le_bytes([lo, hi, bank, 0]))
}

/// Read exactly `N` bytes at `offset` into a fixed-size array.
#[inline]
pub(crate) fn bytes_at<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N]> {
    let end = offset.checked_add(N).ok_or(Error::AddressOutOfBounds {
        offset,
        len: buf.len(),
    })?;
    let slice = buf.get(offset..end).ok_or(Error::AddressOutOfBounds {
        offset: end - 1,
        len: buf.len(),
    })?;
    let mut b = [0u8; N];
    b.copy_from_slice(slice);
    Ok(b)
}
