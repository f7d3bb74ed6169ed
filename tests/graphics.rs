mod common;

use common::RomBuilder;
use smwkit::Error;
use smwkit::compression::Format;
use smwkit::graphics::{self, NO_FILE};
use smwkit::layout::{
    ORIGINAL_GFX_BANK, ORIGINAL_GFX_HIGH, ORIGINAL_GFX_LOW, STANDARD_EXGFX_POINTERS,
    SUPER_EXGFX_POINTERS,
};
use smwkit::rom::Rom;

const ROM_SIZE: usize = 0x80000;

// Decodes to [FF 00] as LZ2 (increasing fill) and to [00 00] as LZ3 (zero
// fill followed by the end-of-stream byte).
const DIALECT_PROBE: [u8; 3] = [0x61, 0xFF, 0xFF];

fn original_entry(builder: &mut RomBuilder, index: u8, addr: u32) {
    let [lo, hi, bank, _] = addr.to_le_bytes();
    builder
        .put(ORIGINAL_GFX_LOW + index as u32, &[lo])
        .put(ORIGINAL_GFX_HIGH + index as u32, &[hi])
        .put(ORIGINAL_GFX_BANK + index as u32, &[bank]);
}

fn image(selector: u8) -> Vec<u8> {
    let mut b = RomBuilder::new(ROM_SIZE);
    b.selector(selector);

    original_entry(&mut b, 0x31, 0x088000);
    b.put(0x088000, &[0x02, b'O', b'R', b'G', 0xFF]);
    original_entry(&mut b, 0x00, 0x0D8000);
    b.put(0x0D8000, &DIALECT_PROBE);

    b.put_u24(STANDARD_EXGFX_POINTERS, 0x0A8000)
        .put_u24(0x0A8000, 0x098000)
        .put_u24(0x0A8003, 0x000000)
        .put_u24(0x0A8006, 0xFFFFFF)
        .put_u24(0x0A8009, 0x7E2000);
    b.put(0x098000, &[0x22, 0x80, 0xFF]);

    b.put_u24(SUPER_EXGFX_POINTERS, 0x0B8000)
        .put_u24(0x0B8000, 0x0C8000)
        .put_u24(0x0B8003, 0x0FFFFE);
    b.put(0x0C8000, &[0x01, 0x10, 0x00, 0xFF]);
    b.put(0x0FFFFE, &[0x09, 0x01]);

    b.build()
}

#[test]
fn locates_each_index_range() {
    let data = image(0);
    let rom = Rom::new(&data).unwrap();
    assert_eq!(graphics::locate(&rom, NO_FILE).unwrap(), None);
    assert_eq!(graphics::locate(&rom, 0x31).unwrap(), Some(0x088000));
    assert_eq!(graphics::locate(&rom, 0x80).unwrap(), Some(0x098000));
    assert_eq!(graphics::locate(&rom, 0x100).unwrap(), Some(0x0C8000));
}

#[test_log::test]
fn decompresses_each_index_range() {
    let data = image(0);
    let rom = Rom::new(&data).unwrap();

    let gfx = graphics::decompress_graphics_file(&rom, 0x31).unwrap();
    assert_eq!(gfx.data, b"ORG");
    assert_eq!(gfx.compressed_size, 5);
    assert_eq!(gfx.decompressed_size, 3);

    let gfx = graphics::decompress_graphics_file(&rom, 0x80).unwrap();
    assert_eq!(gfx.data, [0x80, 0x80, 0x80]);

    let gfx = graphics::decompress_graphics_file(&rom, 0x100).unwrap();
    assert_eq!(gfx.data, [0x10, 0x00]);
    assert_eq!(gfx.compressed_size, 4);
}

#[test]
fn no_file_is_empty() {
    let data = image(0);
    let rom = Rom::new(&data).unwrap();
    let gfx = graphics::decompress_graphics_file(&rom, NO_FILE).unwrap();
    assert!(gfx.data.is_empty());
    assert_eq!(gfx.compressed_size, 0);
    assert_eq!(gfx.decompressed_size, 0);
}

#[test]
fn empty_table_entries_do_not_exist() {
    let data = image(0);
    let rom = Rom::new(&data).unwrap();
    assert!(matches!(
        graphics::decompress_graphics_file(&rom, 0x81),
        Err(Error::FileNotFound(0x81))
    ));
    assert!(matches!(
        graphics::decompress_graphics_file(&rom, 0x82),
        Err(Error::FileNotFound(0x82))
    ));
    for index in [0x32, 0x7E, 0x1000] {
        assert!(matches!(
            graphics::decompress_graphics_file(&rom, index),
            Err(Error::FileNotFound(i)) if i == index
        ));
    }
}

#[test]
fn pointers_into_work_ram_are_unmappable() {
    let data = image(0);
    let rom = Rom::new(&data).unwrap();
    assert!(matches!(
        graphics::decompress_graphics_file(&rom, 0x83),
        Err(Error::AddressUnmappable(0x7E2000))
    ));
}

#[test]
fn truncated_stream_fails_whole_call() {
    let data = image(0);
    let rom = Rom::new(&data).unwrap();
    assert!(matches!(
        graphics::decompress_graphics_file(&rom, 0x101),
        Err(Error::InputExhausted { consumed: 2 })
    ));
}

#[test]
fn selector_picks_the_dialect() {
    for selector in [0, 1] {
        let data = image(selector);
        let rom = Rom::new(&data).unwrap();
        assert_eq!(graphics::compression_format(&rom).unwrap(), Format::Lz2);
        let gfx = graphics::decompress_graphics_file(&rom, 0x00).unwrap();
        assert_eq!(gfx.data, [0xFF, 0x00]);
        assert_eq!(gfx.compressed_size, 3);
    }

    let data = image(2);
    let rom = Rom::new(&data).unwrap();
    assert_eq!(graphics::compression_format(&rom).unwrap(), Format::Lz3);
    let gfx = graphics::decompress_graphics_file(&rom, 0x00).unwrap();
    assert_eq!(gfx.data, [0x00, 0x00]);
    assert_eq!(gfx.compressed_size, 2);
}

#[test]
fn unknown_selector_is_rejected() {
    let data = image(3);
    let rom = Rom::new(&data).unwrap();
    assert!(matches!(
        graphics::decompress_graphics_file(&rom, 0x31),
        Err(Error::UnrecognizedFormat(3))
    ));
    // Nothing is decoded for the empty file, so the selector is never read.
    assert!(graphics::decompress_graphics_file(&rom, NO_FILE).is_ok());
}
