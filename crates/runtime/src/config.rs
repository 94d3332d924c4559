use std::{env, path::PathBuf};

pub const PROGRAM_NAME: &str = "dirtab";
pub const PROGRAM_LOG_LEVEL: &str = "DIRTAB_LOG_LEVEL";
/// Overrides the directory listed when no path is given.
pub const ROOT_OVERRIDE_ENV: &str = "DIRTAB_ROOT";
pub const HISTORY_FILE_NAME: &str = "visits.log";

fn non_empty_var(name: &str) -> Option<PathBuf> {
    env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Directory listed when the user does not supply one.
///
/// `DIRTAB_ROOT` wins, then the home directory, then the working directory.
pub fn default_scan_root() -> PathBuf {
    non_empty_var(ROOT_OVERRIDE_ENV)
        .or_else(dirs::home_dir)
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn state_dir() -> Option<PathBuf> {
    // Check XDG_STATE_HOME first (Linux)
    if let Some(xdg_state) = non_empty_var("XDG_STATE_HOME") {
        return Some(xdg_state.join(PROGRAM_NAME));
    }

    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|p| p.join(PROGRAM_NAME))
}

pub fn history_log_path() -> Option<PathBuf> {
    state_dir().map(|d| d.join(HISTORY_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
