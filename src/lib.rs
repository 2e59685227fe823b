//! gbemu: the CPU and memory bus of the original Game Boy (DMG), written in Rust.
//!
//! Implements the Sharp LR35902 as documented in the
//! [Pan Docs](https://gbdev.io/pandocs/) and the Game Boy CPU manual:
//! the full opcode set and CB-prefixed extension, exact Z/N/H/C flag
//! semantics, and the DMG memory map. Video, audio, timers, interrupts and
//! cartridge bank switching are not emulated.
//!
//! ## Modules
//!
//! - **bus** – [Memory map](https://gbdev.io/pandocs/Memory_Map.html): nine regions, echo RAM
//!   mirroring, I/O register power-up values
//! - **cartridge** – [Cartridge header](https://gbdev.io/pandocs/The_Cartridge_Header.html)
//!   parsing and ROM installation (first 32 KiB only)
//! - **config** – command line for the host binary
//! - **cpu** – [CPU](https://gbdev.io/pandocs/CPU_Instruction_Set.html): registers, flags,
//!   opcode tables, instruction handlers
//! - **logger** – colored `log` backend

pub mod bus;
pub mod cartridge;
pub mod config;
pub mod cpu;
pub mod logger;
