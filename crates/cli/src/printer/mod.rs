use std::io::{self, Write};

use dirtab_fs::Row;
use dirtab_table::{Column, format_mode, format_timestamp};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned columns with optional colors.
    #[default]
    Human,
    /// NDJSON (newline-delimited JSON) for machine consumption.
    Json,
}

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Enable colors when stdout is a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PrinterConfig {
    pub color: ColorChoice,
    /// Print the summary line
    pub show_summary: bool,
    /// Octal permissions instead of `ls` style
    pub raw_mode: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            show_summary: true,
            raw_mode: false,
        }
    }
}

/// Static context about one listing.
#[derive(Debug)]
pub struct ListingContext<'a> {
    /// Directory that was listed
    pub dir: &'a str,
    /// Rows before the limit
    pub total: usize,
    pub truncated: bool,
    pub folders: usize,
    pub files: usize,
}

/// Receives the rows of a listing in display order.
pub trait ListingPrinter {
    fn begin(&mut self, ctx: &ListingContext) -> io::Result<()>;

    fn print_row(&mut self, row: &Row, ctx: &ListingContext) -> io::Result<()>;

    fn finish(&mut self, ctx: &ListingContext) -> io::Result<()>;
}

fn permissions_text(mode: u32, raw: bool) -> String {
    if raw {
        format!("{:o}", mode & 0o7777)
    } else {
        format_mode(mode)
    }
}

/// Display text of every column for one row.
fn row_cells(row: &Row, raw_mode: bool) -> [String; 6] {
    Column::ALL.map(|col| match col {
        Column::Name => row.name.clone(),
        Column::Size => row.size.to_string(),
        Column::Modified => format_timestamp(row.modified_secs),
        Column::Permissions => permissions_text(row.permissions, raw_mode),
        Column::Owner => row.owner.to_string(),
        Column::Kind => row.kind.label().to_owned(),
    })
}

/// Buffers rows so columns can be aligned in `finish`.
pub struct HumanPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
    use_color: bool,
    lines: Vec<([String; 6], bool)>,
}

impl<W: Write, E: Write> HumanPrinter<W, E> {
    /// `ColorChoice::Auto` means no color for arbitrary writers.
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        let use_color = cfg.color == ColorChoice::Always;
        Self {
            out,
            err,
            cfg,
            use_color,
            lines: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl HumanPrinter<io::Stdout, io::Stderr> {
    /// Create a printer that writes to stdout and stderr with TTY detection.
    pub fn stdout(cfg: PrinterConfig) -> Self {
        use std::io::IsTerminal;

        let use_color = match cfg.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };

        let mut printer = Self::new(io::stdout(), io::stderr(), cfg);
        printer.use_color = use_color;
        printer
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

impl<W: Write, E: Write> ListingPrinter for HumanPrinter<W, E> {
    fn begin(&mut self, _ctx: &ListingContext) -> io::Result<()> {
        self.lines.clear();
        Ok(())
    }

    fn print_row(&mut self, row: &Row, _ctx: &ListingContext) -> io::Result<()> {
        self.lines.push((row_cells(row, self.cfg.raw_mode), row.is_dir()));
        Ok(())
    }

    fn finish(&mut self, ctx: &ListingContext) -> io::Result<()> {
        let headers = Column::ALL.map(|c| c.header().to_owned());

        let mut widths = headers.clone().map(|h| h.chars().count());
        for (cells, _) in &self.lines {
            for (w, cell) in widths.iter_mut().zip(cells) {
                *w = (*w).max(cell.chars().count());
            }
        }

        write_line(&mut self.out, &headers, &widths, None)?;
        for (cells, is_dir) in &self.lines {
            let color = (self.use_color && *is_dir).then_some("\x1b[34m");
            write_line(&mut self.out, cells, &widths, color)?;
        }

        if ctx.truncated {
            let remaining = ctx.total.saturating_sub(self.lines.len());
            writeln!(self.out, "... and {} more entries", remaining)?;
        }

        if self.cfg.show_summary {
            writeln!(
                self.err,
                "\n[list] {} ({}, {}) in {}",
                plural(ctx.total, "entry", "entries"),
                plural(ctx.folders, "folder", "folders"),
                plural(ctx.files, "file", "files"),
                ctx.dir,
            )?;
        }

        Ok(())
    }
}

/// Size is right-aligned, everything else left-aligned. The last column is
/// not padded.
fn write_line<W: Write>(
    out: &mut W,
    cells: &[String; 6],
    widths: &[usize; 6],
    name_color: Option<&str>,
) -> io::Result<()> {
    let mut line = String::new();

    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let pad = width.saturating_sub(cell.chars().count());
        let last = i + 1 == cells.len();

        match (Column::from_index(i), name_color) {
            (Some(Column::Size), _) => {
                line.push_str(&" ".repeat(pad));
                line.push_str(cell);
            }
            (Some(Column::Name), Some(color)) => {
                line.push_str(color);
                line.push_str(cell);
                line.push_str("\x1b[0m");
                line.push_str(&" ".repeat(pad));
            }
            _ => {
                line.push_str(cell);
                if !last {
                    line.push_str(&" ".repeat(pad));
                }
            }
        }
    }

    writeln!(out, "{}", line)
}

pub struct JsonPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
}

impl<W: Write, E: Write> JsonPrinter<W, E> {
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        Self { out, err, cfg }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl JsonPrinter<io::Stdout, io::Stderr> {
    pub fn stdout(cfg: PrinterConfig) -> Self {
        Self::new(io::stdout(), io::stderr(), cfg)
    }
}

impl<W: Write, E: Write> ListingPrinter for JsonPrinter<W, E> {
    fn begin(&mut self, _ctx: &ListingContext) -> io::Result<()> {
        Ok(())
    }

    /// The serialized row plus the display strings of the human columns.
    fn print_row(&mut self, row: &Row, ctx: &ListingContext) -> io::Result<()> {
        let mut obj = serde_json::to_value(row).map_err(io::Error::other)?;

        if let Some(map) = obj.as_object_mut() {
            let display = [
                ("dir", ctx.dir.to_owned()),
                ("kind_label", row.kind.label().to_owned()),
                ("size_display", row.size.to_string()),
                ("modified_display", format_timestamp(row.modified_secs)),
                ("mode", permissions_text(row.permissions, self.cfg.raw_mode)),
                ("owner_display", row.owner.to_string()),
            ];
            for (key, value) in display {
                map.insert(key.to_owned(), serde_json::Value::String(value));
            }
        }

        writeln!(self.out, "{}", obj)
    }

    fn finish(&mut self, ctx: &ListingContext) -> io::Result<()> {
        if self.cfg.show_summary {
            let obj = serde_json::json!({
                "type": "summary",
                "dir": ctx.dir,
                "total": ctx.total,
                "truncated": ctx.truncated,
                "folders": ctx.folders,
                "files": ctx.files,
            });
            writeln!(self.err, "{}", obj)?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
