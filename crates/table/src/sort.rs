use std::cmp::Ordering;

use dirtab_fs::Row;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// How names compare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Collation {
    /// Byte-wise, as on case-sensitive filesystems: `B` < `a`.
    #[default]
    CaseSensitive,
    /// Lowercased first; ties fall back to byte order so the sort stays total.
    CaseInsensitive,
}

impl Collation {
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Collation::CaseSensitive => a.cmp(b),
            Collation::CaseInsensitive => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOptions {
    pub group_directories_first: bool,
    pub order: SortOrder,
    pub collation: Collation,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            group_directories_first: true,
            order: SortOrder::Ascending,
            collation: Collation::CaseSensitive,
        }
    }
}

impl SortOptions {
    /// Total order over rows.
    ///
    /// The kind rank is never reversed: descending flips names inside each
    /// group while directories stay on top.
    pub fn compare(&self, a: &Row, b: &Row) -> Ordering {
        let by_name = self.collation.compare(&a.name, &b.name);
        let by_name = match self.order {
            SortOrder::Ascending => by_name,
            SortOrder::Descending => by_name.reverse(),
        };

        if self.group_directories_first {
            a.kind.rank().cmp(&b.kind.rank()).then(by_name)
        } else {
            by_name
        }
    }
}

/// Sorted copy of `rows`. The input is left as is.
pub fn sort_rows(rows: &[Row], opts: &SortOptions) -> Vec<Row> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| opts.compare(a, b));
    sorted
}

pub fn is_sorted(rows: &[Row], opts: &SortOptions) -> bool {
    rows.windows(2)
        .all(|w| opts.compare(&w[0], &w[1]) != Ordering::Greater)
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
