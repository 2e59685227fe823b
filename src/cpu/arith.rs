//! Arithmetic and logic: the eight 8-bit ALU operations, INC/DEC in both
//! widths, 16-bit adds and the accumulator rotates.

use crate::{
    bus::Bus,
    cpu::{
        alu::{self, AluResult},
        cpu::CPU,
    },
};

impl<B: Bus> CPU<B> {
    pub(super) fn execute_alu(&mut self, opcode: u8, arg: u16) {
        match opcode {
            // INC rr / DEC rr: no flags
            0x03 | 0x13 | 0x23 | 0x33 => {
                let rr = opcode >> 4;
                self.write_r16(rr, self.read_r16(rr).wrapping_add(1));
            }
            0x0B | 0x1B | 0x2B | 0x3B => {
                let rr = opcode >> 4;
                self.write_r16(rr, self.read_r16(rr).wrapping_sub(1));
            }

            // INC r / DEC r: Z, N, H; C untouched
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
                let r = opcode >> 3;
                let result = alu::inc8(self.read_r8(r), self.regs.f.carry());
                self.write_r8(r, result.value);
                self.regs.f = result.flags;
            }
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
                let r = opcode >> 3;
                let result = alu::dec8(self.read_r8(r), self.regs.f.carry());
                self.write_r8(r, result.value);
                self.regs.f = result.flags;
            }

            // ADD HL, rr
            0x09 | 0x19 | 0x29 | 0x39 => {
                let rr = self.read_r16(opcode >> 4);
                let (value, flags) = alu::add16(self.regs.hl(), rr, self.regs.f.zero());
                self.regs.set_hl(value);
                self.regs.f = flags;
            }

            // RLCA, RRCA, RLA, RRA: like the CB forms but Z is always cleared
            0x07 | 0x0F | 0x17 | 0x1F => {
                let a = self.regs.a;
                let carry = self.regs.f.carry();
                let result = match opcode {
                    0x07 => alu::rlc(a),
                    0x0F => alu::rrc(a),
                    0x17 => alu::rl(a, carry),
                    _ => alu::rr(a, carry),
                };
                self.regs.a = result.value;
                self.regs.f = result.flags;
                self.regs.f.set_zero(false);
            }

            // op A, r
            0x80..=0xBF => {
                let value = self.read_r8(opcode);
                self.accumulate(opcode >> 3, value);
            }
            // op A, d8
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
                self.accumulate(opcode >> 3, arg as u8);
            }

            // ADD SP, e8
            0xE8 => {
                let (value, flags) = alu::add_sp(self.regs.sp, arg as u8);
                self.regs.sp = value;
                self.regs.f = flags;
            }

            _ => {}
        }
    }

    /// Apply ALU operation `op` (ADD, ADC, SUB, SBC, AND, XOR, OR, CP) to A.
    fn accumulate(&mut self, op: u8, value: u8) {
        let a = self.regs.a;
        let carry = self.regs.f.carry();
        let result: AluResult = match op & 7 {
            0 => alu::add8(a, value, false),
            1 => alu::add8(a, value, carry),
            2 => alu::sub8(a, value, false),
            3 => alu::sub8(a, value, carry),
            4 => alu::and8(a, value),
            5 => alu::xor8(a, value),
            6 => alu::or8(a, value),
            _ => alu::sub8(a, value, false),
        };
        // CP only sets flags.
        if op & 7 != 7 {
            self.regs.a = result.value;
        }
        self.regs.f = result.flags;
    }
}
