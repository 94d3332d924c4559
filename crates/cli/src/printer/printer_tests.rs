use super::*;

use std::path::PathBuf;

use dirtab_fs::{EntryKind, Owner, SizeInfo};

fn row(name: &str, kind: EntryKind, size: SizeInfo, mode: u32) -> Row {
    Row::new(
        name.to_owned(),
        PathBuf::from("/srv").join(name),
        kind,
        size,
        1_700_000_000,
        mode,
        Owner::Name("alice".into()),
    )
}

fn rows() -> Vec<Row> {
    vec![
        row("docs", EntryKind::Directory, SizeInfo::Items(2), 0o040755),
        row("notes.md", EntryKind::File, SizeInfo::Bytes(12345), 0o100644),
    ]
}

fn ctx(total: usize, truncated: bool) -> ListingContext<'static> {
    ListingContext {
        dir: "/srv",
        total,
        truncated,
        folders: 1,
        files: 1,
    }
}

fn cfg() -> PrinterConfig {
    PrinterConfig {
        color: ColorChoice::Never,
        ..PrinterConfig::default()
    }
}

fn run<P: ListingPrinter>(printer: &mut P, rows: &[Row], ctx: &ListingContext) {
    printer.begin(ctx).unwrap();
    for r in rows {
        printer.print_row(r, ctx).unwrap();
    }
    printer.finish(ctx).unwrap();
}

fn text(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("utf8 output")
}

#[test]
fn color_choice_parse() {
    assert_eq!(ColorChoice::parse("always"), ColorChoice::Always);
    assert_eq!(ColorChoice::parse("never"), ColorChoice::Never);
    assert_eq!(ColorChoice::parse("auto"), ColorChoice::Auto);
    assert_eq!(ColorChoice::parse("sometimes"), ColorChoice::Auto);
}

#[test]
fn human_printer_aligns_columns() {
    let mut p = HumanPrinter::new(Vec::new(), Vec::new(), cfg());
    let c = ctx(2, false);
    run(&mut p, &rows(), &c);

    let (out, err) = p.into_parts();
    let out = text(out);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Name         Size"), "{}", lines[0]);
    assert!(lines[0].ends_with("Owner  Type"), "{}", lines[0]);
    assert!(lines[1].starts_with("docs      2 items  "), "{}", lines[1]);
    assert!(lines[1].contains("drwxr-xr-x"));
    assert!(lines[1].ends_with("alice  Folder"));
    assert!(lines[2].starts_with("notes.md    12345  "), "{}", lines[2]);
    assert!(lines[2].contains("-rw-r--r--"));
    assert!(lines[2].ends_with("alice  File"));

    assert_eq!(
        text(err),
        "\n[list] 2 entries (1 folder, 1 file) in /srv\n"
    );
}

#[test]
fn human_printer_reports_rows_left_out() {
    let mut p = HumanPrinter::new(Vec::new(), Vec::new(), cfg());
    let c = ctx(2, true);
    run(&mut p, &rows()[..1], &c);

    let out = text(p.into_parts().0);
    assert!(out.contains("docs"));
    assert!(!out.contains("notes.md"));
    assert!(out.ends_with("... and 1 more entries\n"), "{out}");
}

#[test]
fn human_printer_colors_folders_only() {
    let mut p = HumanPrinter::new(
        Vec::new(),
        Vec::new(),
        PrinterConfig {
            color: ColorChoice::Always,
            show_summary: false,
            ..PrinterConfig::default()
        },
    );
    run(&mut p, &rows(), &ctx(2, false));

    let (out, err) = p.into_parts();
    let out = text(out);
    assert!(out.contains("\x1b[34mdocs\x1b[0m"));
    assert!(!out.contains("\x1b[34mnotes.md"));
    assert!(err.is_empty());
}

#[test]
fn raw_mode_prints_octal() {
    let mut p = HumanPrinter::new(
        Vec::new(),
        Vec::new(),
        PrinterConfig {
            raw_mode: true,
            ..cfg()
        },
    );
    run(&mut p, &rows(), &ctx(2, false));

    let out = text(p.into_parts().0);
    assert!(out.contains("755"));
    assert!(out.contains("644"));
    assert!(!out.contains("rwx"));
}

#[test]
fn json_printer_emits_one_object_per_row() {
    let mut p = JsonPrinter::new(Vec::new(), Vec::new(), cfg());
    run(&mut p, &rows(), &ctx(2, false));

    let (out, err) = p.into_parts();
    let values: Vec<serde_json::Value> = text(out)
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid json line"))
        .collect();

    assert_eq!(values.len(), 2);
    assert_eq!(values[0]["name"], "docs");
    assert_eq!(values[0]["kind"], "Directory");
    assert_eq!(values[0]["kind_label"], "Folder");
    assert_eq!(values[0]["size"]["unit"], "items");
    assert_eq!(values[0]["size"]["value"], 2);
    assert_eq!(values[0]["size_display"], "2 items");
    assert_eq!(values[0]["mode"], "drwxr-xr-x");
    assert_eq!(values[0]["dir"], "/srv");

    assert_eq!(values[1]["kind"], "File");
    assert_eq!(values[1]["size"]["unit"], "bytes");
    assert_eq!(values[1]["size"]["value"], 12345);
    assert_eq!(values[1]["size_display"], "12345");
    assert_eq!(values[1]["permissions"], 0o100644);
    assert_eq!(values[1]["path"], "/srv/notes.md");
    assert_eq!(values[1]["owner"], "alice");
    assert_eq!(values[1]["owner_display"], "alice");
    assert_eq!(values[1]["modified_secs"], 1_700_000_000);
    assert_eq!(
        values[1]["modified_display"],
        format_timestamp(1_700_000_000).as_str()
    );

    let summary: serde_json::Value = serde_json::from_str(text(err).trim()).unwrap();
    assert_eq!(summary["type"], "summary");
    assert_eq!(summary["total"], 2);
    assert_eq!(summary["truncated"], false);
}

#[test]
fn json_printer_serializes_unknown_size_and_unresolved_owner() {
    let mut r = row("locked", EntryKind::Directory, SizeInfo::Unknown, 0o040700);
    r.owner = Owner::Unresolved(4242);

    let mut p = JsonPrinter::new(Vec::new(), Vec::new(), cfg());
    run(&mut p, &[r], &ctx(1, false));

    let v: serde_json::Value = serde_json::from_str(text(p.into_parts().0).trim()).unwrap();
    assert_eq!(v["size"]["unit"], "unknown");
    assert!(v["size"].get("value").is_none());
    assert_eq!(v["size_display"], "?");
    assert_eq!(v["owner"], 4242);
    assert_eq!(v["owner_display"], "4242");
}
