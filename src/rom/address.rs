//! SNES ⇄ PC address translation.
//!
//! Super Mario World is a LoROM cartridge: every bank maps 32 KiB of ROM
//! into its upper half (`$8000-$FFFF`), so a PC offset is the bank number
//! halved combined with the low 15 bits of the address.
//!
//! ```text
//! SNES  bbbbbbbb 1aaaaaaa aaaaaaaa      (bank bit 7 ignored)
//! PC    0bbbbbbb aaaaaaaa aaaaaaa       (bank << 15 | addr & 0x7FFF)
//! ```
//!
//! Unmappable regions:
//! * above 24 bits
//! * `$7E:0000-$7F:FFFF` - work RAM
//! * `$00-$3F:0000-7FFF` and `$80-$BF:0000-7FFF` - hardware registers / low RAM
//!
//! ## SA-1
//! SA-1 cartridges move the upper half of the ROM to banks `$80-$BF`, so
//! addresses at or above `$80:8000` are shifted down by `$40:0000` before
//! folding. The variant is detected from two bytes of the internal header:
//! map mode `0x23` together with chipset `0x32`, `0x34` or `0x35`.
//!
//! ## Canonical addresses
//! Translation is many-to-one (bank mirrors fold onto the same offset).
//! [`Mapping::to_snes`] always returns the canonical form, and
//! `to_snes(to_pc(a)) == a` holds for every canonical `a`.

use log::debug;

use crate::layout::{CHIPSET_OFFSET, MAP_MODE_OFFSET};
use crate::utils::u8_at;
use crate::{Error, Result};

const SA1_MAP_MODE: u8 = 0x23;
const SA1_CHIPSETS: [u8; 3] = [0x32, 0x34, 0x35];

/// Largest PC offset representable in the LoROM half-bank space, exclusive.
pub const MAX_PC_OFFSET: usize = 0x400000;

/// Address mapping used by a ROM image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mapping {
    /// Plain LoROM.
    #[default]
    LoRom,
    /// LoROM with the SA-1 accelerator's upper-bank remap.
    Sa1,
}

impl Mapping {
    /// Detect the mapping from the internal header of an unheadered image.
    ///
    /// Returns [`Error::AddressOutOfBounds`] if the image is too small to hold
    /// the header bytes.
    pub fn detect(rom: &[u8]) -> Result<Self> {
        let map_mode = u8_at(rom, MAP_MODE_OFFSET)?;
        let chipset = u8_at(rom, CHIPSET_OFFSET)?;
        let mapping = if map_mode == SA1_MAP_MODE && SA1_CHIPSETS.contains(&chipset) {
            Self::Sa1
        } else {
            Self::LoRom
        };
        debug!("map mode {map_mode:#04X}, chipset {chipset:#04X}: {mapping:?}");
        Ok(mapping)
    }

    /// Translate a SNES address to a PC offset.
    ///
    /// The result is not checked against any ROM length; see [`snes_to_pc`].
    pub fn to_pc(self, addr: u32) -> Result<usize> {
        if addr > 0xFFFFFF || addr & 0xFE0000 == 0x7E0000 || addr & 0x408000 == 0 {
            return Err(Error::AddressUnmappable(addr));
        }

        let addr = match self {
            Self::Sa1 if addr >= 0x808000 => addr - 0x400000,
            _ => addr,
        };
        Ok((((addr & 0x7F0000) >> 1) | (addr & 0x7FFF)) as usize)
    }

    /// Translate a PC offset to its canonical SNES address.
    pub fn to_snes(self, offset: usize) -> Result<u32> {
        if offset >= MAX_PC_OFFSET {
            return Err(Error::OffsetUnmappable(offset));
        }

        let offset = offset as u32;
        let mut addr = ((offset << 1) & 0x7F0000) | (offset & 0x7FFF) | 0x8000;
        match self {
            Self::Sa1 if addr >= 0x400000 => addr += 0x400000,
            // $70-$7F is SRAM and work RAM, use the $F0-$FF mirrors.
            Self::LoRom if addr & 0xF00000 == 0x700000 => addr |= 0x800000,
            _ => {}
        }
        Ok(addr)
    }
}

/// Returns `true` if `rom` is an SA-1 cartridge.
pub fn uses_sa1(rom: &[u8]) -> Result<bool> {
    Ok(Mapping::detect(rom)? == Mapping::Sa1)
}

/// Translate a SNES address to a PC offset inside `rom`.
///
/// Fails with [`Error::AddressUnmappable`] for addresses outside ROM space and
/// [`Error::AddressOutOfBounds`] when the offset lies past the end of `rom`.
pub fn snes_to_pc(rom: &[u8], addr: u32) -> Result<usize> {
    let offset = Mapping::detect(rom)?.to_pc(addr)?;
    if offset >= rom.len() {
        return Err(Error::AddressOutOfBounds {
            offset,
            len: rom.len(),
        });
    }
    Ok(offset)
}

/// Translate a PC offset inside `rom` to its canonical SNES address.
pub fn pc_to_snes(rom: &[u8], offset: usize) -> Result<u32> {
    if offset >= rom.len() {
        return Err(Error::AddressOutOfBounds {
            offset,
            len: rom.len(),
        });
    }
    Mapping::detect(rom)?.to_snes(offset)
}
