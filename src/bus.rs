//! Memory bus and address decoding for the Game Boy.
//!
//! Maps CPU addresses onto the nine fixed regions of the DMG memory map
//! (ROM banks, VRAM, external RAM, work RAM and its echo, OAM, I/O, HRAM).

use thiserror::Error;

/// Size of the full CPU address space.
pub const ADDRESS_SPACE: usize = 0x1_0000;

/// Offset between work RAM ($C000) and its echo ($E000).
const ECHO_OFFSET: u16 = 0x2000;

/// Byte-addressed read/write surface used by the CPU.
pub trait Bus {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, data: u8);
}

/// Lets the CPU hold a borrowed bus so the host keeps ownership of memory.
impl<B: Bus + ?Sized> Bus for &mut B {
    fn read(&mut self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, data: u8) {
        (**self).write(addr, data);
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemoryError {
    #[error("address ${address:X} is outside the 16-bit address space (value {value:?})")]
    AddressOutOfRange { address: usize, value: Option<u8> },
}

/// The nine regions of the DMG memory map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// $0000–$3FFF
    RomBank0,
    /// $4000–$7FFF
    RomBankN,
    /// $8000–$9FFF
    VideoRam,
    /// $A000–$BFFF
    ExternalRam,
    /// $C000–$DFFF
    WorkRam,
    /// $E000–$FDFF, mirrors $C000–$DDFF
    EchoRam,
    /// $FE00–$FEFF
    SpriteAttributes,
    /// $FF00–$FF7F
    Io,
    /// $FF80–$FFFF
    HighRam,
}

impl Region {
    pub fn decode(addr: u16) -> Region {
        match addr {
            0x0000..=0x3FFF => Region::RomBank0,
            0x4000..=0x7FFF => Region::RomBankN,
            0x8000..=0x9FFF => Region::VideoRam,
            0xA000..=0xBFFF => Region::ExternalRam,
            0xC000..=0xDFFF => Region::WorkRam,
            0xE000..=0xFDFF => Region::EchoRam,
            0xFE00..=0xFEFF => Region::SpriteAttributes,
            0xFF00..=0xFF7F => Region::Io,
            0xFF80..=0xFFFF => Region::HighRam,
        }
    }
}

// I/O register addresses with non-zero power-up values.
pub const NR10: u16 = 0xFF10;
pub const NR11: u16 = 0xFF11;
pub const NR12: u16 = 0xFF12;
pub const NR14: u16 = 0xFF14;
pub const NR21: u16 = 0xFF16;
pub const NR24: u16 = 0xFF19;
pub const NR30: u16 = 0xFF1A;
pub const NR31: u16 = 0xFF1B;
pub const NR32: u16 = 0xFF1C;
pub const NR34: u16 = 0xFF1E;
pub const NR41: u16 = 0xFF20;
pub const NR44: u16 = 0xFF23;
pub const NR50: u16 = 0xFF24;
pub const NR51: u16 = 0xFF25;
pub const NR52: u16 = 0xFF26;
pub const LCDC: u16 = 0xFF40;
pub const BGP: u16 = 0xFF47;
pub const OBP0: u16 = 0xFF48;
pub const OBP1: u16 = 0xFF49;

/// Register values left behind by the boot ROM. Everything else starts at 0.
const IO_DEFAULTS: [(u16, u8); 19] = [
    (NR10, 0x80),
    (NR11, 0xBF),
    (NR12, 0xF3),
    (NR14, 0xBF),
    (NR21, 0x3F),
    (NR24, 0xBF),
    (NR30, 0x7F),
    (NR31, 0xFF),
    (NR32, 0x9F),
    (NR34, 0xBF),
    (NR41, 0xFF),
    (NR44, 0xBF),
    (NR50, 0x77),
    (NR51, 0xF3),
    (NR52, 0xF1),
    (LCDC, 0x91),
    (BGP, 0xFC),
    (OBP0, 0xFF),
    (OBP1, 0xFF),
];

/// Flat 64 KiB Game Boy address space.
pub struct MemoryBus {
    pub mem: Box<[u8; ADDRESS_SPACE]>,
}

impl Default for MemoryBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus {
    /// Create a bus in its post-boot state: zeroed, with the I/O defaults applied.
    pub fn new() -> Self {
        let mut bus = Self {
            mem: Box::new([0; ADDRESS_SPACE]),
        };
        for (addr, value) in IO_DEFAULTS {
            bus.mem[addr as usize] = value;
        }
        bus
    }

    /// Read with a host-side (unbounded) address.
    pub fn try_read(&self, address: usize) -> Result<u8, MemoryError> {
        let addr = u16::try_from(address).map_err(|_| MemoryError::AddressOutOfRange {
            address,
            value: None,
        })?;
        Ok(self.peek(addr))
    }

    /// Write with a host-side (unbounded) address.
    pub fn try_write(&mut self, address: usize, value: u8) -> Result<(), MemoryError> {
        let addr = u16::try_from(address).map_err(|_| MemoryError::AddressOutOfRange {
            address,
            value: Some(value),
        })?;
        self.store(addr, value);
        Ok(())
    }

    /// Copy a ROM image in starting at $0000.
    ///
    /// Fails if the image runs past the end of the address space; nothing is
    /// written in that case.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), MemoryError> {
        if rom.len() > ADDRESS_SPACE {
            return Err(MemoryError::AddressOutOfRange {
                address: ADDRESS_SPACE,
                value: Some(rom[ADDRESS_SPACE]),
            });
        }
        for (address, &byte) in rom.iter().enumerate() {
            self.try_write(address, byte)?;
        }
        Ok(())
    }

    /// Side-effect-free read, usable from `&self`.
    pub fn peek(&self, addr: u16) -> u8 {
        match Region::decode(addr) {
            Region::EchoRam => self.mem[(addr - ECHO_OFFSET) as usize],
            _ => self.mem[addr as usize],
        }
    }

    fn store(&mut self, addr: u16, data: u8) {
        match Region::decode(addr) {
            Region::WorkRam => {
                self.mem[addr as usize] = data;
                // $DE00–$DFFF has no echo.
                if let Some(mirror) = addr.checked_add(ECHO_OFFSET).filter(|&m| m <= 0xFDFF) {
                    self.mem[mirror as usize] = data;
                }
            }
            Region::EchoRam => {
                self.mem[addr as usize] = data;
                self.mem[(addr - ECHO_OFFSET) as usize] = data;
            }
            _ => self.mem[addr as usize] = data,
        }
    }
}

impl Bus for MemoryBus {
    fn read(&mut self, addr: u16) -> u8 {
        self.peek(addr)
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.store(addr, data);
    }
}
