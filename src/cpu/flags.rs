//! LR35902 flag register (F) bits.
//!
//! Only the high nibble is wired; the low nibble always reads back as zero.

pub const FLAG_ZERO: u8 = 1 << 7;
pub const FLAG_SUBTRACT: u8 = 1 << 6;
pub const FLAG_HALF_CARRY: u8 = 1 << 5;
pub const FLAG_CARRY: u8 = 1 << 4;

const FLAG_MASK: u8 = FLAG_ZERO | FLAG_SUBTRACT | FLAG_HALF_CARRY | FLAG_CARRY;

/// Packed Z/N/H/C flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u8);

impl Flags {
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & FLAG_MASK)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build a flag set from the four flag values.
    pub const fn new(zero: bool, subtract: bool, half_carry: bool, carry: bool) -> Self {
        let mut bits = 0;
        if zero {
            bits |= FLAG_ZERO;
        }
        if subtract {
            bits |= FLAG_SUBTRACT;
        }
        if half_carry {
            bits |= FLAG_HALF_CARRY;
        }
        if carry {
            bits |= FLAG_CARRY;
        }
        Self(bits)
    }

    pub const fn zero(self) -> bool {
        self.0 & FLAG_ZERO != 0
    }

    pub const fn subtract(self) -> bool {
        self.0 & FLAG_SUBTRACT != 0
    }

    pub const fn half_carry(self) -> bool {
        self.0 & FLAG_HALF_CARRY != 0
    }

    pub const fn carry(self) -> bool {
        self.0 & FLAG_CARRY != 0
    }

    pub fn set_zero(&mut self, on: bool) {
        self.assign(FLAG_ZERO, on);
    }

    pub fn set_subtract(&mut self, on: bool) {
        self.assign(FLAG_SUBTRACT, on);
    }

    pub fn set_half_carry(&mut self, on: bool) {
        self.assign(FLAG_HALF_CARRY, on);
    }

    pub fn set_carry(&mut self, on: bool) {
        self.assign(FLAG_CARRY, on);
    }

    fn assign(&mut self, bit: u8, on: bool) {
        if on {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
    }
}
