//! Control flow: relative and absolute jumps, calls, returns and restarts.
//!
//! `arg` holds the operand already fetched by the dispatcher, so PC points
//! past the whole instruction when these run. That is the return address
//! pushed by CALL and the base for relative jumps.

use crate::{bus::Bus, cpu::cpu::CPU};

impl<B: Bus> CPU<B> {
    pub(super) fn execute_jump(&mut self, opcode: u8, arg: u16) {
        match opcode {
            // JR e8
            0x18 => self.jump_relative(arg as u8),
            // JR cc, e8
            0x20 | 0x28 | 0x30 | 0x38 => {
                if self.condition(opcode >> 3) {
                    self.jump_relative(arg as u8);
                }
            }

            // JP a16
            0xC3 => self.regs.pc = arg,
            // JP cc, a16
            0xC2 | 0xCA | 0xD2 | 0xDA => {
                if self.condition(opcode >> 3) {
                    self.regs.pc = arg;
                }
            }
            // JP (HL)
            0xE9 => self.regs.pc = self.regs.hl(),

            // CALL a16
            0xCD => self.call(arg),
            // CALL cc, a16
            0xC4 | 0xCC | 0xD4 | 0xDC => {
                if self.condition(opcode >> 3) {
                    self.call(arg);
                }
            }

            // RET
            0xC9 => self.regs.pc = self.pop(),
            // RET cc
            0xC0 | 0xC8 | 0xD0 | 0xD8 => {
                if self.condition(opcode >> 3) {
                    self.regs.pc = self.pop();
                }
            }
            // RETI
            0xD9 => {
                self.regs.pc = self.pop();
                self.ime = true;
            }

            // RST n: vector is bits 3-5 of the opcode
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
                self.call((opcode & 0x38) as u16);
            }

            _ => {}
        }
    }

    fn jump_relative(&mut self, offset: u8) {
        self.regs.pc = self.regs.pc.wrapping_add(offset as i8 as u16);
    }

    fn call(&mut self, target: u16) {
        self.push(self.regs.pc);
        self.regs.pc = target;
    }
}
