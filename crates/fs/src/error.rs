use std::{io, path::PathBuf};

use thiserror::Error;

/// Why a directory produced no rows.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("permission denied: {}", .0.display())]
    AccessDenied(PathBuf),

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub fn is_access_denied(&self) -> bool {
        matches!(self, ScanError::AccessDenied(_))
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::NotADirectory(p) | ScanError::AccessDenied(p) => p,
            ScanError::Io { path, .. } => path,
        }
    }
}
