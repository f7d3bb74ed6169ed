//! Per-level metadata: the level header and the graphics files a level loads.
//!
//! ## Level header
//! The header is the first bytes of the level's layer 1 data, found through
//! the 3-byte pointer table at [`layout::LAYER1_POINTERS`]. Byte 4 holds the
//! tileset in its low nibble.
//!
//! ## Graphics slots
//! Eleven slots, always reported in this order:
//! ```text
//! 0 FG1   1 FG2   2 BG1   3 FG3   4 BG2   5 BG3
//! 6 SP1   7 SP2   8 SP3   9 SP4   10 AN2
//! ```
//! Vanilla levels take FG1-FG3/BG1 and SP1-SP4 from the tileset slot lists
//! and have no BG2, BG3 or AN2 ([`NO_FILE`]). Levels with Lunar Magic's ExGFX
//! bypass enabled store every slot as a little-endian word in their bypass
//! entry:
//! ```text
//! entry = [$0F:F873] + 0x2D00 + level * 0x20
//! [+0x01] bit 7 set -> bypass enabled
//! [+0x06] BG3   [+0x08] BG2   [+0x0A] FG3   [+0x0C] BG1
//! [+0x0E] FG2   [+0x10] FG1   [+0x12] SP4   [+0x14] SP3
//! [+0x16] SP2   [+0x18] SP1   [+0x1A] AN2
//! ```

use log::debug;

use crate::graphics::NO_FILE;
use crate::layout;
use crate::rom::Rom;
use crate::{Error, Result};

/// Number of levels in the game.
pub const LEVEL_COUNT: u16 = 0x200;

/// Number of graphics slots per level.
pub const SLOT_COUNT: usize = 11;

/// Graphics files loaded by a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphicsSlots {
    /// FG1, FG2, BG1, FG3, BG2, BG3.
    pub background: [u16; 6],
    /// SP1-SP4.
    pub sprites: [u16; 4],
    /// AN2, the animated tile area.
    pub animated: u16,
}

impl GraphicsSlots {
    /// Slot by its index in the standard order.
    pub fn get(&self, slot: usize) -> Option<u16> {
        match slot {
            0..=5 => Some(self.background[slot]),
            6..=9 => Some(self.sprites[slot - 6]),
            10 => Some(self.animated),
            _ => None,
        }
    }

    /// All slots in the standard order.
    pub fn to_array(&self) -> [u16; SLOT_COUNT] {
        let mut all = [NO_FILE; SLOT_COUNT];
        all[..6].copy_from_slice(&self.background);
        all[6..10].copy_from_slice(&self.sprites);
        all[10] = self.animated;
        all
    }
}

fn check_level(level: u16) -> Result<u32> {
    if level >= LEVEL_COUNT {
        return Err(Error::InvalidLevel(level));
    }
    Ok(level as u32)
}

/// Read byte `n` of a level's header.
pub fn header_byte(rom: &Rom<'_>, level: u16, n: u8) -> Result<u8> {
    let level = check_level(level)?;
    let data = rom.read_u24(layout::LAYER1_POINTERS + level * 3)?;
    rom.read_u8(data + n as u32)
}

/// The level's tileset, from the low nibble of header byte 4.
pub fn tileset(rom: &Rom<'_>, level: u16) -> Result<u8> {
    Ok(header_byte(rom, level, 4)? & 0x0F)
}

/// SNES address of the level's ExGFX bypass entry, if bypass is enabled.
fn bypass_entry(rom: &Rom<'_>, level: u16) -> Result<Option<u32>> {
    let level = check_level(level)?;
    let block = rom.read_u24(layout::EXGFX_BYPASS_POINTER)?;
    let entry = block + layout::EXGFX_BYPASS_OFFSET + level * layout::EXGFX_BYPASS_ENTRY_LEN;
    let enabled = rom.read_u8(entry + 1)? & 0x80 != 0;
    Ok(enabled.then_some(entry))
}

/// Read four single-byte slots from a tileset slot list.
fn tileset_slots(rom: &Rom<'_>, list: u32, tileset: u8) -> Result<[u16; 4]> {
    let bytes = rom.read_array::<4>(list + tileset as u32 * 4)?;
    Ok(bytes.map(u16::from))
}

/// Read little-endian word slots at the given bypass entry offsets.
fn bypass_slots<const N: usize>(rom: &Rom<'_>, entry: u32, offsets: [u32; N]) -> Result<[u16; N]> {
    let mut slots = [NO_FILE; N];
    for (slot, offset) in slots.iter_mut().zip(offsets) {
        *slot = rom.read_u16(entry + offset)?;
    }
    Ok(slots)
}

/// FG1, FG2, BG1, FG3, BG2, BG3.
pub fn background_slots(rom: &Rom<'_>, level: u16) -> Result<[u16; 6]> {
    match bypass_entry(rom, level)? {
        Some(entry) => bypass_slots(rom, entry, [0x10, 0x0E, 0x0C, 0x0A, 0x08, 0x06]),
        None => {
            let [fg1, fg2, bg1, fg3] =
                tileset_slots(rom, layout::BACKGROUND_SLOT_LIST, tileset(rom, level)?)?;
            Ok([fg1, fg2, bg1, fg3, NO_FILE, NO_FILE])
        }
    }
}

/// SP1-SP4.
pub fn sprite_slots(rom: &Rom<'_>, level: u16) -> Result<[u16; 4]> {
    match bypass_entry(rom, level)? {
        Some(entry) => bypass_slots(rom, entry, [0x18, 0x16, 0x14, 0x12]),
        None => tileset_slots(rom, layout::SPRITE_SLOT_LIST, tileset(rom, level)?),
    }
}

/// AN2. Animated files can be larger than 4 KiB.
pub fn animated_slot(rom: &Rom<'_>, level: u16) -> Result<u16> {
    match bypass_entry(rom, level)? {
        Some(entry) => rom.read_u16(entry + 0x1A),
        None => Ok(NO_FILE),
    }
}

/// All eleven graphics slots of a level.
pub fn graphics_slots(rom: &Rom<'_>, level: u16) -> Result<GraphicsSlots> {
    let slots = GraphicsSlots {
        background: background_slots(rom, level)?,
        sprites: sprite_slots(rom, level)?,
        animated: animated_slot(rom, level)?,
    };
    debug!("level {level:#05X} graphics: {:X?}", slots.to_array());
    Ok(slots)
}

/// One graphics slot of a level, by its index in the standard order.
pub fn graphics_slot(rom: &Rom<'_>, level: u16, slot: usize) -> Result<u16> {
    if slot >= SLOT_COUNT {
        return Err(Error::InvalidSlot(slot));
    }
    graphics_slots(rom, level)?
        .get(slot)
        .ok_or(Error::InvalidSlot(slot))
}
