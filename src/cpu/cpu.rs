use log::{Level, log_enabled, trace, warn};
use thiserror::Error;

use crate::{
    bus::Bus,
    cpu::{
        flags::Flags,
        opcodes::{self, Category},
        registers::{Registers, pair, split},
    },
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CpuError {
    #[error("unrecognized opcode ${opcode:02X} at ${pc:04X}, treated as NOP")]
    UnrecognizedOpcode { opcode: u8, pc: u16 },
}

/// Sharp LR35902 core.
///
/// `B` is usually `&mut MemoryBus`, so the host keeps ownership of the
/// address space and other components see the same bytes the CPU does.
pub struct CPU<B: Bus> {
    pub(crate) regs: Registers,
    pub bus: B,
    pub halted: bool,
    /// Interrupt master enable. Set by EI/RETI, cleared by DI; nothing
    /// services interrupts yet.
    pub ime: bool,
}

impl<B: Bus> CPU<B> {
    /// Create a CPU in the state the boot ROM leaves it in.
    pub fn new(bus: B) -> Self {
        Self {
            regs: Registers::new(),
            bus,
            halted: false,
            ime: false,
        }
    }

    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    pub fn flags(&self) -> Flags {
        self.regs.f
    }

    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    pub fn sp(&self) -> u16 {
        self.regs.sp
    }

    /// Fetch, decode and execute one instruction.
    pub fn step(&mut self) {
        if self.halted {
            return;
        }

        let pc = self.regs.pc;
        let mut opcode = self.fetch_byte();
        let mut descriptor = opcodes::lookup(opcode);
        let prefixed = descriptor.category == Category::Prefix;
        if prefixed {
            opcode = self.fetch_byte();
            descriptor = opcodes::lookup_extended(opcode);
        }

        let arg = match descriptor.operands {
            0 => 0,
            1 => self.fetch_byte() as u16,
            _ => self.fetch_word(),
        };

        if log_enabled!(Level::Trace) {
            trace!("{}", self.trace_line(pc, opcode, prefixed));
        }

        if let Err(err) = self.execute(descriptor.category, opcode, arg, pc) {
            warn!("{err}");
        }
    }

    fn execute(
        &mut self,
        category: Category,
        opcode: u8,
        arg: u16,
        pc: u16,
    ) -> Result<(), CpuError> {
        match category {
            Category::Misc => self.execute_misc(opcode),
            Category::Load => self.execute_load(opcode, arg),
            Category::Alu => self.execute_alu(opcode, arg),
            Category::Stack => self.execute_stack(opcode),
            Category::Jump => self.execute_jump(opcode, arg),
            Category::BitOps => self.execute_bitops(opcode),
            // The prefix is resolved during fetch, so it can only show up
            // here alongside the undefined opcodes.
            Category::Prefix | Category::Unrecognized => {
                return Err(CpuError::UnrecognizedOpcode { opcode, pc });
            }
        }
        Ok(())
    }

    /// Register state in a one-line trace format.
    pub fn trace_line(&self, pc: u16, opcode: u8, prefixed: bool) -> String {
        let op = if prefixed {
            format!("CB {opcode:02X}")
        } else {
            format!("{opcode:02X}   ")
        };
        let r = &self.regs;
        format!(
            "{:04X}  {}  A:{:02X} F:{:02X} B:{:02X} C:{:02X} D:{:02X} E:{:02X} H:{:02X} L:{:02X} SP:{:04X}",
            pc,
            op,
            r.a,
            r.f.bits(),
            r.b,
            r.c,
            r.d,
            r.e,
            r.h,
            r.l,
            r.sp
        )
    }

    pub(super) fn fetch_byte(&mut self) -> u8 {
        let byte = self.bus.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        byte
    }

    pub(super) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte();
        let hi = self.fetch_byte();
        pair(hi, lo)
    }

    /// 8-bit operand in the standard B, C, D, E, H, L, (HL), A encoding.
    pub(super) fn read_r8(&mut self, index: u8) -> u8 {
        match index & 7 {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => self.bus.read(self.regs.hl()),
            _ => self.regs.a,
        }
    }

    pub(super) fn write_r8(&mut self, index: u8, value: u8) {
        match index & 7 {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => self.bus.write(self.regs.hl(), value),
            _ => self.regs.a = value,
        }
    }

    /// 16-bit pair in the BC, DE, HL, SP encoding.
    pub(super) fn read_r16(&self, index: u8) -> u16 {
        match index & 3 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.sp,
        }
    }

    pub(super) fn write_r16(&mut self, index: u8, value: u16) {
        match index & 3 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.regs.sp = value,
        }
    }

    /// Branch condition in the NZ, Z, NC, C encoding.
    pub(super) fn condition(&self, index: u8) -> bool {
        let f = self.regs.f;
        match index & 3 {
            0 => !f.zero(),
            1 => f.zero(),
            2 => !f.carry(),
            _ => f.carry(),
        }
    }

    /// Push high byte then low byte, decrementing SP before each write.
    pub(super) fn push(&mut self, value: u16) {
        let (hi, lo) = split(value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.bus.write(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.bus.write(self.regs.sp, lo);
    }

    pub(super) fn pop(&mut self) -> u16 {
        let lo = self.bus.read(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = self.bus.read(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        pair(hi, lo)
    }
}
