//! Sharp LR35902 CPU emulation for the Game Boy.
//!
//! Full documented instruction set plus the CB-prefixed table; undefined
//! opcodes are reported and skipped. Memory goes through the `Bus` trait.

pub mod alu;
mod arith;
mod bitops;
pub mod cpu;
pub mod flags;
mod jump;
mod load;
mod misc;
pub mod opcodes;
pub mod registers;
mod stack;

#[cfg(test)]
mod tests;
