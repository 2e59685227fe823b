//! Opcode descriptor tables.
//!
//! Each of the 256 primary and 256 CB-prefixed opcodes maps to a handler
//! [`Category`] and the number of operand bytes that follow it. Both tables
//! are built at compile time from exhaustive matches.

/// Opcode byte that selects the extended (CB) table.
pub const PREFIX_CB: u8 = 0xCB;

/// Handler family an opcode is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// NOP, STOP, HALT, DI, EI, DAA, CPL, SCF, CCF.
    Misc,
    /// 8- and 16-bit loads and stores.
    Load,
    /// 8-bit arithmetic/logic, INC/DEC, 16-bit adds, accumulator rotates.
    Alu,
    /// PUSH / POP.
    Stack,
    /// JR, JP, CALL, RET, RETI, RST.
    Jump,
    /// CB-prefixed rotates, shifts, SWAP, BIT, RES, SET.
    BitOps,
    /// The CB prefix itself.
    Prefix,
    /// Not defined on the hardware.
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub category: Category,
    /// Operand bytes following the opcode (0, 1 or 2).
    pub operands: u8,
}

impl Descriptor {
    const fn new(category: Category, operands: u8) -> Self {
        Self { category, operands }
    }
}

pub static PRIMARY: [Descriptor; 256] = build(false);
pub static EXTENDED: [Descriptor; 256] = build(true);

/// Descriptor for an unprefixed opcode.
pub fn lookup(opcode: u8) -> Descriptor {
    PRIMARY[opcode as usize]
}

/// Descriptor for a CB-prefixed opcode.
pub fn lookup_extended(opcode: u8) -> Descriptor {
    EXTENDED[opcode as usize]
}

const fn build(prefixed: bool) -> [Descriptor; 256] {
    let mut table = [Descriptor::new(Category::Unrecognized, 0); 256];
    let mut i = 0;
    while i < 256 {
        table[i] = if prefixed {
            extended(i as u8)
        } else {
            primary(i as u8)
        };
        i += 1;
    }
    table
}

const fn primary(opcode: u8) -> Descriptor {
    use Category::*;
    match opcode {
        0x00 | 0x27 | 0x2F | 0x37 | 0x3F | 0x76 | 0xF3 | 0xFB => Descriptor::new(Misc, 0),
        // STOP is followed by a padding byte.
        0x10 => Descriptor::new(Misc, 1),

        // LD rr, d16
        0x01 | 0x11 | 0x21 | 0x31 => Descriptor::new(Load, 2),
        // LD (rr), A / LD A, (rr) including HL+ and HL-
        0x02 | 0x12 | 0x22 | 0x32 | 0x0A | 0x1A | 0x2A | 0x3A => Descriptor::new(Load, 0),
        // LD r, d8 and LD (HL), d8
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => Descriptor::new(Load, 1),
        // LD (a16), SP
        0x08 => Descriptor::new(Load, 2),
        // LD r, r'
        0x40..=0x7F => Descriptor::new(Load, 0),
        // LDH (a8), A / LDH A, (a8) / LD HL, SP+e8
        0xE0 | 0xF0 | 0xF8 => Descriptor::new(Load, 1),
        // LD (C), A / LD A, (C) / LD SP, HL
        0xE2 | 0xF2 | 0xF9 => Descriptor::new(Load, 0),
        // LD (a16), A / LD A, (a16)
        0xEA | 0xFA => Descriptor::new(Load, 2),

        // INC/DEC rr, INC/DEC r, ADD HL, rr
        0x03 | 0x13 | 0x23 | 0x33 | 0x0B | 0x1B | 0x2B | 0x3B => Descriptor::new(Alu, 0),
        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => Descriptor::new(Alu, 0),
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => Descriptor::new(Alu, 0),
        0x09 | 0x19 | 0x29 | 0x39 => Descriptor::new(Alu, 0),
        // ADD/ADC/SUB/SBC/AND/XOR/OR/CP r
        0x80..=0xBF => Descriptor::new(Alu, 0),
        // ... d8, and ADD SP, e8
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE | 0xE8 => Descriptor::new(Alu, 1),

        0xC1 | 0xD1 | 0xE1 | 0xF1 | 0xC5 | 0xD5 | 0xE5 | 0xF5 => Descriptor::new(Stack, 0),

        // JR e8 / JR cc, e8
        0x18 | 0x20 | 0x28 | 0x30 | 0x38 => Descriptor::new(Jump, 1),
        // JP / JP cc / CALL / CALL cc
        0xC2 | 0xC3 | 0xCA | 0xD2 | 0xDA => Descriptor::new(Jump, 2),
        0xC4 | 0xCC | 0xCD | 0xD4 | 0xDC => Descriptor::new(Jump, 2),
        // RET / RET cc / RETI / JP (HL)
        0xC0 | 0xC8 | 0xC9 | 0xD0 | 0xD8 | 0xD9 | 0xE9 => Descriptor::new(Jump, 0),
        // RST
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => Descriptor::new(Jump, 0),

        // RLCA, RRCA, RLA, RRA
        0x07 | 0x0F | 0x17 | 0x1F => Descriptor::new(Alu, 0),

        PREFIX_CB => Descriptor::new(Prefix, 0),

        0xD3 | 0xDB | 0xDD | 0xE3 | 0xE4 | 0xEB | 0xEC | 0xED | 0xF4 | 0xFC | 0xFD => {
            Descriptor::new(Unrecognized, 0)
        }
    }
}

const fn extended(_opcode: u8) -> Descriptor {
    // Every CB opcode is defined; the operand (register or bit index) is
    // encoded in the opcode itself.
    Descriptor::new(Category::BitOps, 0)
}
