use std::{
    fs::{self, DirEntry},
    io::{self, ErrorKind},
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use log::debug;

use crate::{
    diagnostics::{Diagnostic, DiagnosticSink, LogSink},
    error::ScanError,
    owner::{OwnerResolver, entry_mode, entry_uid, system_resolver},
    record::{EntryKind, Owner, Row, SizeInfo},
};

/// Platform capabilities a scan reads through.
pub struct ScanContext {
    pub owners: Box<dyn OwnerResolver>,
    pub diagnostics: Box<dyn DiagnosticSink>,
}

impl ScanContext {
    pub fn new(owners: Box<dyn OwnerResolver>, diagnostics: Box<dyn DiagnosticSink>) -> Self {
        Self {
            owners,
            diagnostics,
        }
    }
}

impl Default for ScanContext {
    fn default() -> Self {
        Self::new(system_resolver(), Box::new(LogSink))
    }
}

/// Snapshot the immediate children of `path`.
///
/// Only regular files and directories become rows; symlinks and special
/// files are skipped, as are entries that disappear mid-scan. Rows come back
/// in OS enumeration order.
pub fn scan(path: &Path, ctx: &mut ScanContext) -> Result<Vec<Row>, ScanError> {
    let dir = std::path::absolute(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match fs::metadata(&dir) {
        Ok(meta) if meta.is_dir() => {}
        Err(e) if e.kind() == ErrorKind::PermissionDenied => return Err(deny(dir, ctx)),
        _ => return Err(ScanError::NotADirectory(dir)),
    }

    let rd = match fs::read_dir(&dir) {
        Ok(rd) => rd,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => return Err(deny(dir, ctx)),
        Err(source) => return Err(ScanError::Io { path: dir, source }),
    };

    let mut rows = Vec::new();
    for entry_res in rd {
        let entry = match entry_res {
            Ok(e) => e,
            Err(e) => {
                debug!("[scan] error reading entry in {:?}: {e}", dir);
                continue;
            }
        };

        match inspect_entry(&entry, &*ctx.owners) {
            Ok(Some(row)) => rows.push(row),
            Ok(None) => {}
            // Readable but not searchable (`r--`): names list, entries do not stat.
            Err(e) if e.kind() == ErrorKind::PermissionDenied => return Err(deny(dir, ctx)),
            Err(e) => debug!("[scan] skipping {:?}: {e}", entry.path()),
        }
    }

    debug!("[scan] {} rows from {:?}", rows.len(), dir);
    Ok(rows)
}

fn deny(dir: PathBuf, ctx: &mut ScanContext) -> ScanError {
    ctx.diagnostics.report(Diagnostic::AccessDenied(dir.clone()));
    ScanError::AccessDenied(dir)
}

/// `Ok(None)` for entries that are not rows: symlinks, specials, vanished.
fn inspect_entry(entry: &DirEntry, owners: &dyn OwnerResolver) -> io::Result<Option<Row>> {
    let file_type = match entry.file_type() {
        Ok(t) => t,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    let kind = if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        return Ok(None);
    };

    let metadata = match entry.metadata() {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let full_path = entry.path();
    let name = entry.file_name().to_string_lossy().into_owned();

    let size = match kind {
        EntryKind::File => SizeInfo::Bytes(metadata.len()),
        EntryKind::Directory => count_children(&full_path),
    };

    let uid = entry_uid(&metadata);
    let owner = owners
        .resolve(uid)
        .map(Owner::Name)
        .unwrap_or(Owner::Unresolved(uid));

    Ok(Some(Row::new(
        name,
        full_path,
        kind,
        size,
        to_unix_secs(metadata.modified().ok()),
        entry_mode(&metadata),
        owner,
    )))
}

fn count_children(dir: &Path) -> SizeInfo {
    match fs::read_dir(dir) {
        Ok(rd) => SizeInfo::Items(rd.filter_map(Result::ok).count()),
        Err(_) => SizeInfo::Unknown,
    }
}

/// Seconds relative to the epoch; negative before it, 0 when unknown.
fn to_unix_secs(t: Option<SystemTime>) -> i64 {
    match t.map(|tt| tt.duration_since(UNIX_EPOCH)) {
        Some(Ok(d)) => d.as_secs() as i64,
        Some(Err(before)) => -(before.duration().as_secs() as i64),
        None => 0,
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
