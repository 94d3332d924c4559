use std::{io, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Args;
use dirtab_fs::{EntryKind, ScanContext, ScanError};
use dirtab_runtime::{
    default_scan_root,
    history::{VisitEvent, VisitLog},
};
use dirtab_table::{Collation, DirectoryTable, SortOptions, SortOrder};
use log::{debug, error};

use crate::printer::{
    ColorChoice, HumanPrinter, JsonPrinter, ListingContext, ListingPrinter, OutputFormat,
    PrinterConfig,
};

#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Output rows as NDJSON (one JSON object per line)
    #[arg(long)]
    pub json: bool,

    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,

    /// Suppress the summary line
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Show permissions as octal instead of `rwx` letters
    #[arg(long)]
    pub raw_mode: bool,
}

impl OutputOptions {
    pub fn make_printer(&self) -> Box<dyn ListingPrinter> {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        };

        let cfg = PrinterConfig {
            color: ColorChoice::parse(&self.color),
            show_summary: !self.quiet,
            raw_mode: self.raw_mode,
        };

        match format {
            OutputFormat::Human => Box::new(HumanPrinter::stdout(cfg)),
            OutputFormat::Json => Box::new(JsonPrinter::stdout(cfg)),
        }
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Directory to list (default: $DIRTAB_ROOT, then the home directory)
    pub path: Option<PathBuf>,

    /// Sort by name only instead of folders first
    #[arg(long)]
    pub flat: bool,

    /// Reverse the name order
    #[arg(long, short = 'r')]
    pub desc: bool,

    /// Compare names case-insensitively
    #[arg(long, short = 'i')]
    pub ignore_case: bool,

    /// Maximum number of rows to display
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub output: OutputOptions,
}

impl ListArgs {
    pub fn sort_options(&self) -> SortOptions {
        SortOptions {
            group_directories_first: !self.flat,
            order: if self.desc {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            },
            collation: if self.ignore_case {
                Collation::CaseInsensitive
            } else {
                Collation::CaseSensitive
            },
        }
    }
}

pub fn run(args: ListArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            error!("[list] {e:#}");
            eprintln!("[list] {e:#}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: ListArgs) -> Result<ExitCode> {
    let path = args.path.clone().unwrap_or_else(default_scan_root);
    let mut table = DirectoryTable::new(args.sort_options());
    let mut ctx = ScanContext::default();

    match table.set_dirpath(&path, &mut ctx) {
        Ok(n) => debug!("[list] {n} rows"),
        Err(e @ (ScanError::NotADirectory(_) | ScanError::AccessDenied(_))) => {
            eprintln!("[list] {e}");
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e).context("listing failed"),
    }

    if let (Some(visits), Some(dir)) = (VisitLog::new(), table.dir_path()) {
        visits.record(VisitEvent::new(dir.to_string_lossy(), table.row_count()));
    }

    let limit = args.limit.unwrap_or(usize::MAX);
    let mut printer = args.output.make_printer();
    print_table(&table, printer.as_mut(), limit).context("writing output")?;

    Ok(ExitCode::SUCCESS)
}

/// Stream the table's rows through `printer` in their sorted order.
///
/// Printers see at most `limit` rows; the rest only show up in `ctx.total`.
pub fn print_table(
    table: &DirectoryTable,
    printer: &mut dyn ListingPrinter,
    limit: usize,
) -> io::Result<()> {
    let dir = table
        .dir_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    let ctx = ListingContext {
        dir: &dir,
        total: table.row_count(),
        truncated: table.row_count() > limit,
        folders: table.count_kind(EntryKind::Directory),
        files: table.count_kind(EntryKind::File),
    };

    printer.begin(&ctx)?;
    for row in table.rows().iter().take(limit) {
        printer.print_row(row, &ctx)?;
    }
    printer.finish(&ctx)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
