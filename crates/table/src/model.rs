use std::path::{Component, Path, PathBuf};

use dirtab_fs::{EntryKind, Row, ScanContext, ScanError, SizeInfo, scan};
use log::debug;

use crate::{
    column::{Column, ItemFlags},
    format::{Cell, format_timestamp},
    sort::{SortOptions, sort_rows},
};

/// Ordered rows of one directory plus column accessors.
///
/// Rows are replaced wholesale on every listing; nothing is patched
/// incrementally.
#[derive(Debug, Default)]
pub struct DirectoryTable {
    dir_path: Option<PathBuf>,
    rows: Vec<Row>,
    sort: SortOptions,
}

impl DirectoryTable {
    pub fn new(sort: SortOptions) -> Self {
        Self {
            dir_path: None,
            rows: Vec::new(),
            sort,
        }
    }

    pub fn dir_path(&self) -> Option<&Path> {
        self.dir_path.as_deref()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        Column::ALL.len()
    }

    pub fn header(&self, column: Column) -> &'static str {
        column.header()
    }

    pub fn flags(&self, column: Column) -> ItemFlags {
        column.flags()
    }

    pub fn sort_options(&self) -> SortOptions {
        self.sort
    }

    /// List `path` and replace the current rows.
    ///
    /// On error the previous listing stays in place.
    pub fn set_dirpath(
        &mut self,
        path: &Path,
        ctx: &mut ScanContext,
    ) -> Result<usize, ScanError> {
        let rows = scan(path, ctx)?;
        let dir = std::path::absolute(path)
            .map(|abs| lexical_clean(&abs))
            .unwrap_or_else(|_| path.to_path_buf());

        debug!("[table] {} rows for {}", rows.len(), dir.display());
        self.rows = sort_rows(&rows, &self.sort);
        self.dir_path = Some(dir);
        Ok(self.rows.len())
    }

    /// Re-list the current directory.
    pub fn refresh(&mut self, ctx: &mut ScanContext) -> Result<Option<usize>, ScanError> {
        match self.dir_path.clone() {
            Some(dir) => self.set_dirpath(&dir, ctx).map(Some),
            None => Ok(None),
        }
    }

    /// List the parent directory. `Ok(None)` at the filesystem root.
    pub fn navigate_up(&mut self, ctx: &mut ScanContext) -> Result<Option<usize>, ScanError> {
        let parent = match self.dir_path.as_deref().and_then(Path::parent) {
            Some(p) => p.to_path_buf(),
            None => return Ok(None),
        };
        self.set_dirpath(&parent, ctx).map(Some)
    }

    /// Re-order the current rows without rescanning.
    pub fn set_sort(&mut self, sort: SortOptions) {
        self.sort = sort;
        self.rows = sort_rows(&self.rows, &self.sort);
    }

    pub fn cell(&self, row: usize, column: Column) -> Option<Cell> {
        let r = self.rows.get(row)?;

        let cell = match column {
            Column::Name => Cell::Text(r.name.clone()),
            Column::Size => match r.size {
                SizeInfo::Bytes(n) => Cell::Number(n),
                other => Cell::Text(other.to_string()),
            },
            Column::Modified => Cell::Text(format_timestamp(r.modified_secs)),
            Column::Permissions => Cell::Number(u64::from(r.permissions)),
            Column::Owner => Cell::Text(r.owner.to_string()),
            Column::Kind => Cell::Text(r.kind.label().to_owned()),
        };
        Some(cell)
    }

    /// Value offered to an in-place editor. Only editable columns have one.
    pub fn edit_value(&self, row: usize, column: Column) -> Option<&str> {
        if !column.is_editable() {
            return None;
        }
        self.rows.get(row).map(|r| r.name.as_str())
    }

    /// Apply an in-place edit. Renames are in memory only and keep the row
    /// where it is.
    pub fn set_data(&mut self, row: usize, column: Column, value: &str) -> bool {
        if !column.is_editable() {
            return false;
        }

        match self.rows.get_mut(row) {
            Some(r) => {
                r.rename(value);
                true
            }
            None => false,
        }
    }

    pub fn count_kind(&self, kind: EntryKind) -> usize {
        self.rows.iter().filter(|r| r.kind == kind).count()
    }
}

/// Drop `.` and fold `..` into its parent without touching the filesystem,
/// so `Path::parent` always climbs.
fn lexical_clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            // `..` at the root stays at the root
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
