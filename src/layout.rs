//! Fixed table locations inside a Lunar Magic-edited Super Mario World ROM.
//!
//! All values are SNES addresses unless noted otherwise. They describe the
//! layout of one specific game and editor, so they are plain constants rather
//! than configuration.
//!
//! ```text
//! $00:A8C3  sprite GFX slot list      (4 bytes × tileset)
//! $00:A92B  FG/BG GFX slot list       (4 bytes × tileset)
//! $00:B992  GFX00-GFX31 low bytes     (0x32 entries)
//! $00:B9C4  GFX00-GFX31 high bytes    (0x32 entries)
//! $00:B9F6  GFX00-GFX31 bank bytes    (0x32 entries)
//! $00:FFC0  internal ROM title        (21 bytes)
//! $05:E000  layer 1 pointer table     (3 bytes × level)
//! $0F:F0A0  Lunar Magic tag string    (0x80 bytes)
//! $0F:F873  -> super ExGFX pointers / ExGFX bypass block
//! $0F:F94F  -> standard ExGFX pointers
//! $0F:FFEB  compression format selector
//! ```

/// PC offset of the cartridge map-mode byte in the internal header.
pub const MAP_MODE_OFFSET: usize = 0x7FD5;
/// PC offset of the cartridge chipset byte in the internal header.
pub const CHIPSET_OFFSET: usize = 0x7FD6;

/// Internal ROM title.
pub const ROM_TITLE: u32 = 0x00FFC0;
/// Length of the internal ROM title in bytes.
pub const ROM_TITLE_LEN: usize = 21;

/// Byte selecting the ROM-wide graphics compression format.
pub const COMPRESSION_FORMAT: u32 = 0x0FFFEB;

/// Low bytes of the addresses of GFX00-GFX31.
pub const ORIGINAL_GFX_LOW: u32 = 0x00B992;
/// High bytes of the addresses of GFX00-GFX31.
pub const ORIGINAL_GFX_HIGH: u32 = 0x00B9C4;
/// Bank bytes of the addresses of GFX00-GFX31.
pub const ORIGINAL_GFX_BANK: u32 = 0x00B9F6;

/// Pointer to the pointer table of ExGFX80-ExGFXFF.
pub const STANDARD_EXGFX_POINTERS: u32 = 0x0FF94F;
/// Pointer to the pointer table of ExGFX100-ExGFXFFF (RATS-protected).
pub const SUPER_EXGFX_POINTERS: u32 = 0x0FF873;

/// Pointer to the block holding the per-level ExGFX bypass lists.
pub const EXGFX_BYPASS_POINTER: u32 = 0x0FF873;
/// Distance from the start of that block to the bypass lists. Not an address.
pub const EXGFX_BYPASS_OFFSET: u32 = 0x2D00;
/// Size of one level's bypass entry.
pub const EXGFX_BYPASS_ENTRY_LEN: u32 = 0x20;

/// Layer 1 data pointers; the level header sits at the start of that data.
pub const LAYER1_POINTERS: u32 = 0x05E000;
/// Sprite GFX slots of each vanilla tileset (4 bytes each).
pub const SPRITE_SLOT_LIST: u32 = 0x00A8C3;
/// FG/BG GFX slots of each vanilla tileset (4 bytes each).
pub const BACKGROUND_SLOT_LIST: u32 = 0x00A92B;

/// Start of the Lunar Magic tag string.
pub const LUNAR_MAGIC_TAG: u32 = 0x0FF0A0;
/// End (exclusive) of the Lunar Magic tag string.
pub const LUNAR_MAGIC_TAG_END: u32 = 0x0FF120;
