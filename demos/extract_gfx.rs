use std::env;
use std::fs;

use log::{info, warn};
use smwkit::rom::{Rom, header};
use smwkit::{Result, graphics, lunar_magic};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "smw.smc".into());
    let index = args
        .next()
        .and_then(|s| u16::from_str_radix(s.trim_start_matches("0x"), 16).ok())
        .unwrap_or(0x80);

    let dump = fs::read(&path)?;
    let rom = Rom::from_dump(&dump)?;

    info!("title: {:?}, mapping: {:?}", header::title(&rom)?, rom.mapping());
    if !lunar_magic::is_modified(&rom)? {
        warn!("{path} has not been edited with Lunar Magic");
    } else if !lunar_magic::is_supported_version(&rom)? {
        warn!("Lunar Magic version {:?} is untested", lunar_magic::version(&rom)?);
    }

    let gfx = graphics::decompress_graphics_file(&rom, index)?;
    println!(
        "GFX{index:X}: {} compressed bytes -> {} bytes",
        gfx.compressed_size, gfx.decompressed_size
    );
    fs::write(format!("GFX{index:03X}.bin"), &gfx.data)?;

    Ok(())
}
