use std::{
    env,
    fs::{self, File, OpenOptions},
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::history_log_path;

pub const HISTORY_VERSION: u8 = 1;

pub const HISTORY_DISABLED_ENV: &str = "DIRTAB_HISTORY";

/// One successful directory listing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VisitEvent {
    pub version: u8,
    pub timestamp: DateTime<Utc>,
    /// Absolute path that was listed
    pub path: String,
    /// Rows produced by the scan
    pub rows: usize,
}

impl VisitEvent {
    pub fn new(path: impl Into<String>, rows: usize) -> Self {
        Self {
            version: HISTORY_VERSION,
            timestamp: Utc::now(),
            path: path.into(),
            rows,
        }
    }
}

/// Append-only NDJSON log of visited directories.
pub struct VisitLog {
    path: PathBuf,
}

fn history_disabled() -> bool {
    env::var(HISTORY_DISABLED_ENV)
        .map(|val| val == "0" || val.eq_ignore_ascii_case("false"))
        .unwrap_or(false)
}

impl VisitLog {
    /// `None` when history is disabled or no state directory exists.
    pub fn new() -> Option<Self> {
        if history_disabled() {
            return None;
        }

        history_log_path().map(Self::at)
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best effort: failures are logged, never returned.
    pub fn record(&self, event: VisitEvent) {
        if let Err(e) = self.append(&event) {
            debug!("[history] failed to record visit to {}: {e}", event.path);
        }
    }

    fn append(&self, event: &VisitEvent) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut line = serde_json::to_string(event).map_err(io::Error::other)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(line.as_bytes())
    }

    fn read_events(&self) -> Vec<VisitEvent> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(_) => return Vec::new(),
        };

        let mut events = Vec::new();
        for line in BufReader::new(file).lines() {
            match line {
                Ok(line) => match serde_json::from_str(&line) {
                    Ok(ev) => events.push(ev),
                    Err(e) => debug!("[history] skipping malformed line: {e}"),
                },
                Err(e) => {
                    debug!("[history] error reading {}: {e}", self.path.display());
                    break;
                }
            }
        }
        events
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> Vec<VisitEvent> {
        let mut events = self.read_events();
        events.reverse();
        events.truncate(limit);
        events
    }

    pub fn count(&self) -> usize {
        self.read_events().len()
    }

    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
