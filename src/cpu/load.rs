//! 8- and 16-bit loads, including the $FF00-page (LDH) forms and the
//! auto-incrementing/decrementing HL addressing modes.

use crate::{
    bus::Bus,
    cpu::{alu, cpu::CPU, registers::split},
};

/// Base address of the I/O page used by LDH.
const HIGH_PAGE: u16 = 0xFF00;

impl<B: Bus> CPU<B> {
    pub(super) fn execute_load(&mut self, opcode: u8, arg: u16) {
        match opcode {
            // LD rr, d16
            0x01 | 0x11 | 0x21 | 0x31 => self.write_r16(opcode >> 4, arg),

            // LD (BC), A / LD (DE), A
            0x02 => self.bus.write(self.regs.bc(), self.regs.a),
            0x12 => self.bus.write(self.regs.de(), self.regs.a),
            // LD (HL+), A / LD (HL-), A
            0x22 => {
                let hl = self.regs.hl();
                self.bus.write(hl, self.regs.a);
                self.regs.set_hl(hl.wrapping_add(1));
            }
            0x32 => {
                let hl = self.regs.hl();
                self.bus.write(hl, self.regs.a);
                self.regs.set_hl(hl.wrapping_sub(1));
            }

            // LD A, (BC) / LD A, (DE)
            0x0A => self.regs.a = self.bus.read(self.regs.bc()),
            0x1A => self.regs.a = self.bus.read(self.regs.de()),
            // LD A, (HL+) / LD A, (HL-)
            0x2A => {
                let hl = self.regs.hl();
                self.regs.a = self.bus.read(hl);
                self.regs.set_hl(hl.wrapping_add(1));
            }
            0x3A => {
                let hl = self.regs.hl();
                self.regs.a = self.bus.read(hl);
                self.regs.set_hl(hl.wrapping_sub(1));
            }

            // LD r, d8 / LD (HL), d8
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
                self.write_r8(opcode >> 3, arg as u8);
            }

            // LD (a16), SP
            0x08 => {
                let (hi, lo) = split(self.regs.sp);
                self.bus.write(arg, lo);
                self.bus.write(arg.wrapping_add(1), hi);
            }

            // LD r, r' (0x76 is HALT and never reaches here)
            0x40..=0x7F => {
                let value = self.read_r8(opcode);
                self.write_r8(opcode >> 3, value);
            }

            // LDH (a8), A / LDH A, (a8)
            0xE0 => self.bus.write(HIGH_PAGE | arg, self.regs.a),
            0xF0 => self.regs.a = self.bus.read(HIGH_PAGE | arg),
            // LD (C), A / LD A, (C)
            0xE2 => self.bus.write(HIGH_PAGE | self.regs.c as u16, self.regs.a),
            0xF2 => self.regs.a = self.bus.read(HIGH_PAGE | self.regs.c as u16),

            // LD (a16), A / LD A, (a16)
            0xEA => self.bus.write(arg, self.regs.a),
            0xFA => self.regs.a = self.bus.read(arg),

            // LD HL, SP+e8
            0xF8 => {
                let (value, flags) = alu::add_sp(self.regs.sp, arg as u8);
                self.regs.set_hl(value);
                self.regs.f = flags;
            }
            // LD SP, HL
            0xF9 => self.regs.sp = self.regs.hl(),

            _ => {}
        }
    }
}
