use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Text for the type column.
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::File => "File",
            EntryKind::Directory => "Folder",
        }
    }

    /// Grouping rank: directories sort before files.
    pub fn rank(self) -> u8 {
        match self {
            EntryKind::Directory => 0,
            EntryKind::File => 1,
        }
    }
}

/// Size column value. Files carry bytes, directories an item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum SizeInfo {
    Bytes(u64),
    Items(usize),
    /// Directory whose children could not be listed
    Unknown,
}

impl fmt::Display for SizeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeInfo::Bytes(n) => write!(f, "{n}"),
            SizeInfo::Items(1) => f.write_str("1 item"),
            SizeInfo::Items(n) => write!(f, "{n} items"),
            SizeInfo::Unknown => f.write_str("?"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Owner {
    Name(String),
    /// uid with no entry in the user database
    Unresolved(u32),
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Name(name) => f.write_str(name),
            Owner::Unresolved(uid) => write!(f, "{uid}"),
        }
    }
}

/// Snapshot of one directory entry taken at scan time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Display name; editable in memory only
    pub name: String,
    path: PathBuf,
    pub kind: EntryKind,
    pub size: SizeInfo,
    /// Seconds since the Unix epoch
    pub modified_secs: i64,
    /// Raw OS mode bits
    pub permissions: u32,
    pub owner: Owner,
}

impl Row {
    pub fn new(
        name: String,
        path: PathBuf,
        kind: EntryKind,
        size: SizeInfo,
        modified_secs: i64,
        permissions: u32,
        owner: Owner,
    ) -> Self {
        Self {
            name,
            path,
            kind,
            size,
            modified_secs,
            permissions,
            owner,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Changes the in-memory name. The file on disk is untouched.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
