#![allow(dead_code)]

use smwkit::layout::{COMPRESSION_FORMAT, MAP_MODE_OFFSET};
use smwkit::rom::Mapping;

/// Builds unheadered LoROM images with data placed at SNES addresses.
pub struct RomBuilder {
    data: Vec<u8>,
}

impl RomBuilder {
    pub fn new(size: usize) -> Self {
        let mut data = vec![0u8; size];
        data[MAP_MODE_OFFSET] = 0x20;
        Self { data }
    }

    pub fn put(&mut self, addr: u32, bytes: &[u8]) -> &mut Self {
        let pc = Mapping::LoRom.to_pc(addr).unwrap();
        self.data[pc..pc + bytes.len()].copy_from_slice(bytes);
        self
    }

    pub fn put_u24(&mut self, addr: u32, value: u32) -> &mut Self {
        let bytes = value.to_le_bytes();
        self.put(addr, &bytes[..3])
    }

    pub fn put_u16(&mut self, addr: u32, value: u16) -> &mut Self {
        self.put(addr, &value.to_le_bytes())
    }

    pub fn selector(&mut self, value: u8) -> &mut Self {
        self.put(COMPRESSION_FORMAT, &[value])
    }

    pub fn build(&self) -> Vec<u8> {
        self.data.clone()
    }
}
