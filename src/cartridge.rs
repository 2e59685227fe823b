//! Game Boy cartridge images.
//!
//! Parses the cartridge header at $0100–$014F (title at $0134, cartridge
//! type at $0147, ROM size code at $0148) and copies the image into the two
//! fixed ROM regions of the bus. There is no bank switching: only the first
//! 32 KiB of an image is visible to the CPU.

use std::{fs, path::Path};

use log::{info, warn};
use thiserror::Error;

use crate::bus::{MemoryBus, MemoryError};

/// End of the cartridge header.
const HEADER_END: usize = 0x0150;
const TITLE: std::ops::Range<usize> = 0x0134..0x0144;
const CARTRIDGE_TYPE: usize = 0x0147;
const ROM_SIZE: usize = 0x0148;

/// Bytes of ROM the CPU can see without a mapper ($0000–$7FFF).
pub const ROM_WINDOW: usize = 0x8000;

#[derive(Debug, Error)]
pub enum CartridgeError {
    #[error("failed to read ROM: {0}")]
    Io(#[from] std::io::Error),
    #[error("ROM image is {0} bytes, too small to hold a cartridge header")]
    TooSmall(usize),
    #[error("failed to map ROM: {0}")]
    Memory(#[from] MemoryError),
}

pub struct Cartridge {
    pub title: String,
    /// Header byte $0147.
    pub kind: u8,
    /// Header byte $0148; the image holds `2 << code` 16 KiB banks.
    pub rom_size_code: u8,
    pub rom: Vec<u8>,
}

impl Cartridge {
    /// Read a ROM image from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CartridgeError> {
        let data = fs::read(path)?;
        Self::from_bytes(data)
    }

    pub fn from_bytes(rom: Vec<u8>) -> Result<Self, CartridgeError> {
        if rom.len() < HEADER_END {
            return Err(CartridgeError::TooSmall(rom.len()));
        }

        let title = rom[TITLE]
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '?' })
            .collect::<String>()
            .trim_end()
            .to_string();

        Ok(Self {
            title,
            kind: rom[CARTRIDGE_TYPE],
            rom_size_code: rom[ROM_SIZE],
            rom,
        })
    }

    /// Human-readable name of the cartridge's memory controller.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            0x00 => "ROM ONLY",
            0x01..=0x03 => "MBC1",
            0x05 | 0x06 => "MBC2",
            0x08 | 0x09 => "ROM+RAM",
            0x0F..=0x13 => "MBC3",
            0x19..=0x1E => "MBC5",
            _ => "unknown",
        }
    }

    /// Number of 16 KiB ROM banks the header declares.
    pub fn rom_banks(&self) -> usize {
        2usize << self.rom_size_code.min(8)
    }

    /// Copy the visible part of the image into the bus starting at $0000.
    pub fn install(&self, bus: &mut MemoryBus) -> Result<(), CartridgeError> {
        info!(
            "cartridge \"{}\": {} ({} ROM banks, {} bytes)",
            self.title,
            self.kind_name(),
            self.rom_banks(),
            self.rom.len()
        );
        if self.rom.len() > ROM_WINDOW {
            warn!(
                "no bank switching; only the first {} of {} bytes are mapped",
                ROM_WINDOW,
                self.rom.len()
            );
        }
        let visible = &self.rom[..self.rom.len().min(ROM_WINDOW)];
        bus.load_rom(visible)?;
        Ok(())
    }
}
