//! CB-prefixed instructions.
//!
//! Layout of the extended opcode: bits 0-2 select the operand (B, C, D, E,
//! H, L, (HL), A); bits 3-5 select the rotate/shift kind or the bit index;
//! bits 6-7 select rotate/shift, BIT, RES or SET.

use crate::{
    bus::Bus,
    cpu::{alu, cpu::CPU},
};

impl<B: Bus> CPU<B> {
    pub(super) fn execute_bitops(&mut self, opcode: u8) {
        let r = opcode & 7;
        let bit = (opcode >> 3) & 7;
        let value = self.read_r8(r);

        match opcode >> 6 {
            0 => {
                let carry = self.regs.f.carry();
                let result = match bit {
                    0 => alu::rlc(value),
                    1 => alu::rrc(value),
                    2 => alu::rl(value, carry),
                    3 => alu::rr(value, carry),
                    4 => alu::sla(value),
                    5 => alu::sra(value),
                    6 => alu::swap(value),
                    _ => alu::srl(value),
                };
                self.write_r8(r, result.value);
                self.regs.f = result.flags;
            }
            // BIT n: Z from the tested bit, N cleared, H set, C kept
            1 => {
                self.regs.f.set_zero(value & (1 << bit) == 0);
                self.regs.f.set_subtract(false);
                self.regs.f.set_half_carry(true);
            }
            2 => self.write_r8(r, value & !(1 << bit)),
            _ => self.write_r8(r, value | (1 << bit)),
        }
    }
}
