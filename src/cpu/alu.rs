//! Pure 8- and 16-bit arithmetic for the LR35902.
//!
//! Every function returns the result together with the complete flag set it
//! produces. Callers that must preserve a flag (INC/DEC keep C, ADD HL keeps
//! Z) pass the current value in.

use crate::cpu::flags::Flags;

/// Result of an 8-bit ALU operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AluResult {
    pub value: u8,
    pub flags: Flags,
}

impl AluResult {
    const fn new(value: u8, flags: Flags) -> Self {
        Self { value, flags }
    }
}

pub fn add8(a: u8, b: u8, carry_in: bool) -> AluResult {
    let c = carry_in as u16;
    let sum = a as u16 + b as u16 + c;
    let value = sum as u8;
    let half = (a & 0x0F) as u16 + (b & 0x0F) as u16 + c > 0x0F;
    AluResult::new(value, Flags::new(value == 0, false, half, sum > 0xFF))
}

pub fn sub8(a: u8, b: u8, carry_in: bool) -> AluResult {
    let c = carry_in as u16;
    let value = a.wrapping_sub(b).wrapping_sub(c as u8);
    let half = ((a & 0x0F) as u16) < (b & 0x0F) as u16 + c;
    let borrow = (a as u16) < b as u16 + c;
    AluResult::new(value, Flags::new(value == 0, true, half, borrow))
}

pub fn and8(a: u8, b: u8) -> AluResult {
    let value = a & b;
    AluResult::new(value, Flags::new(value == 0, false, true, false))
}

pub fn or8(a: u8, b: u8) -> AluResult {
    let value = a | b;
    AluResult::new(value, Flags::new(value == 0, false, false, false))
}

pub fn xor8(a: u8, b: u8) -> AluResult {
    let value = a ^ b;
    AluResult::new(value, Flags::new(value == 0, false, false, false))
}

pub fn inc8(value: u8, carry: bool) -> AluResult {
    let result = value.wrapping_add(1);
    AluResult::new(
        result,
        Flags::new(result == 0, false, value & 0x0F == 0x0F, carry),
    )
}

pub fn dec8(value: u8, carry: bool) -> AluResult {
    let result = value.wrapping_sub(1);
    AluResult::new(
        result,
        Flags::new(result == 0, true, value & 0x0F == 0x00, carry),
    )
}

/// ADD HL, rr. Half-carry comes from bit 11, carry from bit 15.
pub fn add16(hl: u16, rr: u16, zero: bool) -> (u16, Flags) {
    let sum = hl as u32 + rr as u32;
    let half = (hl & 0x0FFF) + (rr & 0x0FFF) > 0x0FFF;
    (sum as u16, Flags::new(zero, false, half, sum > 0xFFFF))
}

/// SP + signed 8-bit displacement (ADD SP, e8 and LD HL, SP+e8).
///
/// H and C are taken from the unsigned addition of the low byte; Z and N are
/// always cleared.
pub fn add_sp(sp: u16, offset: u8) -> (u16, Flags) {
    let value = sp.wrapping_add(offset as i8 as u16);
    let half = (sp & 0x0F) + (offset as u16 & 0x0F) > 0x0F;
    let carry = (sp & 0xFF) + offset as u16 > 0xFF;
    (value, Flags::new(false, false, half, carry))
}

/// Decimal adjust after an 8-bit add or subtract.
pub fn daa(a: u8, flags: Flags) -> AluResult {
    let mut adjust = 0u8;
    let mut carry = flags.carry();
    if flags.half_carry() || (!flags.subtract() && a & 0x0F > 0x09) {
        adjust |= 0x06;
    }
    if carry || (!flags.subtract() && a > 0x99) {
        adjust |= 0x60;
        carry = true;
    }
    let value = if flags.subtract() {
        a.wrapping_sub(adjust)
    } else {
        a.wrapping_add(adjust)
    };
    AluResult::new(value, Flags::new(value == 0, flags.subtract(), false, carry))
}

// CB-prefixed rotates and shifts. All set Z from the result and clear N/H.

pub fn rlc(value: u8) -> AluResult {
    let result = value.rotate_left(1);
    shifted(result, value & 0x80 != 0)
}

pub fn rrc(value: u8) -> AluResult {
    let result = value.rotate_right(1);
    shifted(result, value & 0x01 != 0)
}

pub fn rl(value: u8, carry_in: bool) -> AluResult {
    let result = (value << 1) | carry_in as u8;
    shifted(result, value & 0x80 != 0)
}

pub fn rr(value: u8, carry_in: bool) -> AluResult {
    let result = (value >> 1) | ((carry_in as u8) << 7);
    shifted(result, value & 0x01 != 0)
}

pub fn sla(value: u8) -> AluResult {
    shifted(value << 1, value & 0x80 != 0)
}

/// Arithmetic shift right: bit 7 is kept.
pub fn sra(value: u8) -> AluResult {
    shifted((value >> 1) | (value & 0x80), value & 0x01 != 0)
}

pub fn srl(value: u8) -> AluResult {
    shifted(value >> 1, value & 0x01 != 0)
}

pub fn swap(value: u8) -> AluResult {
    shifted(value.rotate_left(4), false)
}

fn shifted(value: u8, carry: bool) -> AluResult {
    AluResult::new(value, Flags::new(value == 0, false, false, carry))
}
