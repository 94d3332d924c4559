use bitflags::bitflags;

bitflags! {
    /// Per-column interaction flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        const ENABLED    = 0b0000_0001;
        const SELECTABLE = 0b0000_0010;
        /// In-place edits are accepted
        const EDITABLE   = 0b0000_0100;
    }
}

/// Table columns in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Size,
    Modified,
    Permissions,
    Owner,
    Kind,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Name,
        Column::Size,
        Column::Modified,
        Column::Permissions,
        Column::Owner,
        Column::Kind,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Column> {
        Self::ALL.get(index).copied()
    }

    pub fn header(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Size => "Size",
            Column::Modified => "Modified",
            Column::Permissions => "Permissions",
            Column::Owner => "Owner",
            Column::Kind => "Type",
        }
    }

    pub fn flags(self) -> ItemFlags {
        match self {
            Column::Name => ItemFlags::ENABLED | ItemFlags::SELECTABLE | ItemFlags::EDITABLE,
            _ => ItemFlags::ENABLED,
        }
    }

    pub fn is_editable(self) -> bool {
        self.flags().contains(ItemFlags::EDITABLE)
    }
}
