//! **smwkit** - a reusable Rust library for reading Super Mario World ROMs
//! edited with Lunar Magic.
//!
//! The library is read-only: it translates addresses, looks up level
//! metadata and decompresses graphics. It never writes to the image.
//!
//! # Modules
//! | Module | Purpose |
//! |--------|---------|
//! | [`rom`]          | [`rom::Rom`] view, SNES ⇄ PC translation, SA-1 detection, copier headers |
//! | [`compression`]  | LZ2 / LZ3 decoders |
//! | [`graphics`]     | GFX / ExGFX lookup and decompression |
//! | [`level`]        | Level header bytes and graphics slots |
//! | [`lunar_magic`]  | Editor tag and version checks |
//! | [`layout`]       | Fixed table addresses |
//!
//! # Example
//! ```no_run
//! use smwkit::rom::Rom;
//! use smwkit::{graphics, level};
//!
//! # fn main() -> smwkit::Result<()> {
//! let dump = std::fs::read("smw.smc")?;
//! let rom = Rom::from_dump(&dump)?;
//! let file = level::graphics_slot(&rom, 0x105, 4)?;
//! let gfx = graphics::decompress_graphics_file(&rom, file)?;
//! println!("{} bytes of tiles", gfx.decompressed_size);
//! # Ok(())
//! # }
//! ```

pub mod compression;
pub mod error;
pub mod graphics;
pub mod layout;
pub mod level;
pub mod lunar_magic;
pub mod rom;
mod utils;

pub use error::{Error, Result};
