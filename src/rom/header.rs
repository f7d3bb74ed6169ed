//! Copier header detection and the internal ROM header.
//!
//! Dumps made with old copier devices carry a 512-byte header in front of
//! the ROM proper. Every lookup in this crate expects the header stripped.
//!
//! ## Size rule
//! ```text
//! len % 0x8000 == 0            -> unheadered
//! (len - 0x200) % 0x800 == 0   -> headered
//! anything else                -> unknown
//! ```

use super::Rom;
use crate::layout::{ROM_TITLE, ROM_TITLE_LEN};
use crate::{Error, Result};

/// Size of a copier header in bytes.
pub const COPIER_HEADER_LEN: usize = 0x200;

/// Returns `true` if `data` starts with a copier header.
///
/// Returns [`Error::UnknownHeaderLayout`] when the size fits neither layout.
pub fn has_copier_header(data: &[u8]) -> Result<bool> {
    let len = data.len();
    if len % 0x8000 == 0 {
        return Ok(false);
    }
    if len >= COPIER_HEADER_LEN && (len - COPIER_HEADER_LEN) % 0x800 == 0 {
        return Ok(true);
    }
    Err(Error::UnknownHeaderLayout(len))
}

/// Return the unheadered part of a dump.
pub fn strip_copier_header(data: &[u8]) -> Result<&[u8]> {
    if has_copier_header(data)? {
        Ok(&data[COPIER_HEADER_LEN..])
    } else {
        Ok(data)
    }
}

/// Read the internal ROM title with trailing padding removed.
pub fn title(rom: &Rom<'_>) -> Result<String> {
    let start = rom.to_pc(ROM_TITLE)?;
    let bytes = rom.slice_pc(start, ROM_TITLE_LEN)?;
    let title = String::from_utf8_lossy(bytes);
    Ok(title.trim_end_matches(' ').to_owned())
}
