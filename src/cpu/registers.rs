//! LR35902 register file.

use crate::cpu::flags::Flags;

/// Join two 8-bit halves into a 16-bit pair, high byte first.
pub const fn pair(high: u8, low: u8) -> u16 {
    ((high as u16) << 8) | low as u16
}

/// Split a 16-bit pair into `(high, low)`.
pub const fn split(value: u16) -> (u8, u8) {
    ((value >> 8) as u8, value as u8)
}

/// Register file.
///
/// The 8-bit registers are stored separately; AF, BC, DE and HL are
/// computed from them on demand rather than aliased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// Register state after the DMG boot ROM hands over to the cartridge.
    pub const fn new() -> Self {
        Self {
            a: 0x01,
            f: Flags::from_bits(0xB0),
            b: 0x00,
            c: 0x13,
            d: 0x00,
            e: 0xD8,
            h: 0x01,
            l: 0x4D,
            sp: 0xFFFE,
            pc: 0x0100,
        }
    }

    pub const fn af(&self) -> u16 {
        pair(self.a, self.f.bits())
    }

    pub fn set_af(&mut self, value: u16) {
        let (a, f) = split(value);
        self.a = a;
        self.f = Flags::from_bits(f);
    }

    pub const fn bc(&self) -> u16 {
        pair(self.b, self.c)
    }

    pub fn set_bc(&mut self, value: u16) {
        (self.b, self.c) = split(value);
    }

    pub const fn de(&self) -> u16 {
        pair(self.d, self.e)
    }

    pub fn set_de(&mut self, value: u16) {
        (self.d, self.e) = split(value);
    }

    pub const fn hl(&self) -> u16 {
        pair(self.h, self.l)
    }

    pub fn set_hl(&mut self, value: u16) {
        (self.h, self.l) = split(value);
    }
}
