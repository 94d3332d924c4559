use std::sync::OnceLock;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::PROGRAM_LOG_LEVEL;

const DEFAULT_LEVEL: Level = Level::Warn;

enum LogTarget {
    Stderr,
}

/// Stderr logger behind the `log` facade.
pub struct Logger {
    level: Level,
    target: LogTarget,
}

fn format_line(record: &Record<'_>) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    format!(
        "{} {} [{}] {}",
        timestamp,
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record);
        match self.target {
            LogTarget::Stderr => eprintln!("{line}"),
        }
    }

    fn flush(&self) {}
}

/// `off` and unparsable values fall back to the default level.
fn parse_level(raw: Option<&str>) -> Level {
    raw.and_then(|s| s.trim().parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
        .unwrap_or(DEFAULT_LEVEL)
}

fn level_from_env() -> Level {
    parse_level(std::env::var(PROGRAM_LOG_LEVEL).ok().as_deref())
}

/// Install the process logger, reading the level from `DIRTAB_LOG_LEVEL`.
pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(level_from_env())
}

pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    // Only the first call installs; later levels are ignored so the
    // stored logger and the global max level never disagree.
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let logger = LOGGER.get_or_init(|| Logger {
        level,
        target: LogTarget::Stderr,
    });

    log::set_logger(logger)?;
    log::set_max_level(level.to_level_filter());

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
