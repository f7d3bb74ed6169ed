//! Lunar Magic detection.
//!
//! Lunar Magic expands the ROM to at least 1 MiB and leaves a 0x80-byte tag
//! at `$0F:F0A0`, e.g.
//! ```text
//! Lunar Magic Version 2.21 Public ©2013 FuSoYa, Defender of Relm ...
//! ^0x00                ^0x14
//! ```
//! The table addresses in [`crate::layout`] match the version reported by
//! [`SUPPORTED_VERSION`]; other versions may move them.

use crate::Result;
use crate::layout::{LUNAR_MAGIC_TAG, LUNAR_MAGIC_TAG_END};
use crate::rom::Rom;

/// Editor version the fixed table addresses were taken from.
pub const SUPPORTED_VERSION: (u32, u32) = (2, 21);

/// Smallest image size of an expanded ROM.
pub const MIN_EXPANDED_SIZE: usize = 0x100000;

const TAG_PREFIX: &[u8] = b"Lunar Magic";
const VERSION_OFFSET: usize = 0x14;

/// The raw tag bytes.
pub fn tag<'a>(rom: &Rom<'a>) -> Result<&'a [u8]> {
    let start = rom.to_pc(LUNAR_MAGIC_TAG)?;
    let end = rom.to_pc(LUNAR_MAGIC_TAG_END)?;
    rom.slice_pc(start, end - start)
}

/// The tag decoded as text. Non-ASCII bytes (the © sign) are replaced.
pub fn tag_string(rom: &Rom<'_>) -> Result<String> {
    Ok(String::from_utf8_lossy(tag(rom)?).into_owned())
}

/// Returns `true` if the ROM has been expanded and tagged by Lunar Magic.
///
/// Most lookups in this crate only make sense on such ROMs.
pub fn is_modified(rom: &Rom<'_>) -> Result<bool> {
    if rom.len() < MIN_EXPANDED_SIZE {
        return Ok(false);
    }
    Ok(tag(rom)?.starts_with(TAG_PREFIX))
}

/// The `major.minor` version recorded in the tag, if it parses.
pub fn version(rom: &Rom<'_>) -> Result<Option<(u32, u32)>> {
    let tag = tag(rom)?;
    Ok(tag.get(VERSION_OFFSET..).and_then(parse_version))
}

/// Returns `true` if the tag names [`SUPPORTED_VERSION`].
pub fn is_supported_version(rom: &Rom<'_>) -> Result<bool> {
    Ok(version(rom)? == Some(SUPPORTED_VERSION))
}

fn parse_version(text: &[u8]) -> Option<(u32, u32)> {
    let (major, rest) = leading_number(text)?;
    let rest = rest.strip_prefix(b".")?;
    let (minor, _) = leading_number(rest)?;
    Some((major, minor))
}

fn leading_number(text: &[u8]) -> Option<(u32, &[u8])> {
    let digits = text.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let number = std::str::from_utf8(&text[..digits]).ok()?.parse().ok()?;
    Some((number, &text[digits..]))
}
