//! Host configuration from the command line.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// One DMG frame is 70224 clocks, or 17556 machine cycles.
pub const STEPS_PER_FRAME: usize = 17_556;

#[derive(Parser, Debug)]
#[command(name = "gbemu", about = "Run a Game Boy ROM on the LR35902 core")]
pub struct Config {
    /// Path to the cartridge image (.gb)
    pub rom: PathBuf,

    /// Log every executed instruction (overrides --log-level)
    #[arg(long)]
    pub trace: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Instructions executed per displayed frame
    #[arg(long, default_value_t = STEPS_PER_FRAME)]
    pub steps_per_frame: usize,

    /// Window scale factor
    #[arg(long, value_enum, default_value_t = WindowScale::X4)]
    pub scale: WindowScale,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowScale {
    X1,
    X2,
    X4,
    X8,
}

impl Config {
    /// Effective log level, with `--trace` taking precedence.
    pub fn level_filter(&self) -> LevelFilter {
        if self.trace {
            return LevelFilter::Trace;
        }
        match self.log_level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
