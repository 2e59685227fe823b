//! Minimal `log` backend printing colored level tags to stderr.

use ansi_term::Colour::{Blue, Green, Purple, Red, Yellow};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct Logger;

static LOGGER: Logger = Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} {}", tag(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}

fn tag(level: Level) -> String {
    let style = match level {
        Level::Error => Red.bold(),
        Level::Warn => Yellow.bold(),
        Level::Info => Green.bold(),
        Level::Debug => Blue.normal(),
        Level::Trace => Purple.normal(),
    };
    style.paint(format!("{:<5}", level)).to_string()
}

/// Install the logger. Fails if another logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
