mod config;
pub mod history;
pub mod logging;

pub use config::{
    PROGRAM_LOG_LEVEL, PROGRAM_NAME, ROOT_OVERRIDE_ENV, default_scan_root, history_log_path,
    state_dir,
};

pub use logging::init;
