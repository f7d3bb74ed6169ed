//! Graphics file lookup and decompression.
//!
//! Graphics files are addressed by a 12-bit index. The index range decides
//! which table holds the file's SNES address:
//!
//! | Index           | Kind             | Address source |
//! |-----------------|------------------|----------------|
//! | `0x00-0x31`     | GFX00-GFX31      | three parallel byte tables (low, high, bank) |
//! | `0x7F`          | none             | - |
//! | `0x80-0xFF`     | standard ExGFX   | `[[$0F:F94F]] + (index - 0x80) * 3` |
//! | `0x100-0xFFF`   | super ExGFX      | `[[$0F:F873]] + (index - 0x100) * 3` |
//!
//! Table entries of `$000000` or `$FFFFFF` mark unused files. The resolved
//! stream is decoded with the ROM-wide format selected by the byte at
//! [`layout::COMPRESSION_FORMAT`].

use log::debug;

use crate::compression::{self, Decompressed, Format};
use crate::layout;
use crate::rom::Rom;
use crate::{Error, Result};

/// Index meaning "no graphics file".
pub const NO_FILE: u16 = 0x7F;

/// A graphics file index classified by its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsFile {
    /// Index `0x7F`.
    None,
    /// GFX00-GFX31.
    Original(u8),
    /// ExGFX80-ExGFXFF.
    StandardExGfx(u16),
    /// ExGFX100-ExGFXFFF.
    SuperExGfx(u16),
}

impl GraphicsFile {
    /// Classify a file index.
    ///
    /// Returns [`Error::FileNotFound`] for indices outside every range.
    pub fn from_index(index: u16) -> Result<Self> {
        match index {
            0x00..=0x31 => Ok(Self::Original(index as u8)),
            NO_FILE => Ok(Self::None),
            0x80..=0xFF => Ok(Self::StandardExGfx(index)),
            0x100..=0xFFF => Ok(Self::SuperExGfx(index)),
            _ => Err(Error::FileNotFound(index)),
        }
    }

    /// The file index.
    pub fn index(self) -> u16 {
        match self {
            Self::None => NO_FILE,
            Self::Original(index) => index as u16,
            Self::StandardExGfx(index) | Self::SuperExGfx(index) => index,
        }
    }

    /// Resolve the SNES address of the file's compressed stream.
    ///
    /// Returns `None` for [`GraphicsFile::None`] without touching the ROM.
    pub fn locate(self, rom: &Rom<'_>) -> Result<Option<u32>> {
        let addr = match self {
            Self::None => return Ok(None),
            Self::Original(index) => {
                let index = index as u32;
                let lo = rom.read_u8(layout::ORIGINAL_GFX_LOW + index)?;
                let hi = rom.read_u8(layout::ORIGINAL_GFX_HIGH + index)?;
                let bank = rom.read_u8(layout::ORIGINAL_GFX_BANK + index)?;
                u32::from_le_bytes([lo, hi, bank, 0])
            }
            Self::StandardExGfx(index) => {
                pointer_table_entry(rom, layout::STANDARD_EXGFX_POINTERS, index - 0x80)?
            }
            Self::SuperExGfx(index) => {
                pointer_table_entry(rom, layout::SUPER_EXGFX_POINTERS, index - 0x100)?
            }
        };

        if addr == 0 || addr == 0xFFFFFF {
            return Err(Error::FileNotFound(self.index()));
        }
        debug!("graphics file {:#X} at ${addr:06X}", self.index());
        Ok(Some(addr))
    }
}

/// Read entry `slot` of the pointer table whose address is stored at `cell`.
fn pointer_table_entry(rom: &Rom<'_>, cell: u32, slot: u16) -> Result<u32> {
    let table = rom.read_u24(cell)?;
    rom.read_u24(table + slot as u32 * 3)
}

/// Resolve the SNES address of graphics file `index`.
///
/// Returns `None` for [`NO_FILE`].
pub fn locate(rom: &Rom<'_>, index: u16) -> Result<Option<u32>> {
    GraphicsFile::from_index(index)?.locate(rom)
}

/// The compression format used by every graphics file in `rom`.
pub fn compression_format(rom: &Rom<'_>) -> Result<Format> {
    Format::from_selector(rom.read_u8(layout::COMPRESSION_FORMAT)?)
}

/// Decompress graphics file `index`.
///
/// [`NO_FILE`] yields empty output with both sizes zero.
pub fn decompress_graphics_file(rom: &Rom<'_>, index: u16) -> Result<Decompressed> {
    let Some(addr) = locate(rom, index)? else {
        return Ok(Decompressed::default());
    };
    let stream = rom.slice_from(addr)?;
    let format = compression_format(rom)?;
    debug!("decoding graphics file {index:#X} as {format:?}");
    compression::decompress(format, stream)
}
