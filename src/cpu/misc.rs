//! Control instructions: NOP, STOP, HALT, DI, EI and the flag/accumulator
//! adjustments DAA, CPL, SCF, CCF.

use log::debug;

use crate::{
    bus::Bus,
    cpu::{alu, cpu::CPU},
};

impl<B: Bus> CPU<B> {
    pub(super) fn execute_misc(&mut self, opcode: u8) {
        match opcode {
            0x00 => {}
            // STOP and HALT both wait for an interrupt; without an interrupt
            // controller the CPU simply stays halted.
            0x10 | 0x76 => {
                debug!(
                    "{} at ${:04X}",
                    if opcode == 0x10 { "STOP" } else { "HALT" },
                    self.regs.pc
                );
                self.halted = true;
            }
            0xF3 => self.ime = false,
            0xFB => self.ime = true,
            0x27 => {
                let result = alu::daa(self.regs.a, self.regs.f);
                self.regs.a = result.value;
                self.regs.f = result.flags;
            }
            0x2F => {
                self.regs.a = !self.regs.a;
                self.regs.f.set_subtract(true);
                self.regs.f.set_half_carry(true);
            }
            0x37 => {
                self.regs.f.set_subtract(false);
                self.regs.f.set_half_carry(false);
                self.regs.f.set_carry(true);
            }
            0x3F => {
                let carry = self.regs.f.carry();
                self.regs.f.set_subtract(false);
                self.regs.f.set_half_carry(false);
                self.regs.f.set_carry(!carry);
            }
            _ => {}
        }
    }
}
