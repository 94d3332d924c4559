mod diagnostics;
mod error;
mod owner;
mod record;
mod scanner;

pub use diagnostics::{BufferedSink, Diagnostic, DiagnosticSink, LogSink};
pub use error::ScanError;
pub use owner::{
    FixedOwner, NoOwners, OwnerResolver, PasswdResolver, entry_mode, entry_uid, system_resolver,
};
pub use record::{EntryKind, Owner, Row, SizeInfo};
pub use scanner::{ScanContext, scan};
