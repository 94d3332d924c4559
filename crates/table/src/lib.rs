mod column;
mod format;
mod model;
mod sort;

pub use column::{Column, ItemFlags};
pub use format::{Cell, format_mode, format_timestamp};
pub use model::DirectoryTable;
pub use sort::{Collation, SortOptions, SortOrder, is_sorted, sort_rows};
