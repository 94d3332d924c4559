use super::*;

use std::fs::{create_dir, write};

use clap::Parser;
use dirtab_fs::{BufferedSink, FixedOwner};

use crate::{Cli, commands::Command, printer::JsonPrinter};

fn parse_list(argv: &[&str]) -> ListArgs {
    let cli = Cli::try_parse_from(argv).expect("valid args");
    match cli.command {
        Command::List(args) => args,
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn default_flags_sort_folders_first() {
    let args = parse_list(&["dirtab", "list", "/tmp"]);
    assert_eq!(args.path, Some(PathBuf::from("/tmp")));
    assert_eq!(args.sort_options(), SortOptions::default());
    assert_eq!(args.limit, None);
}

#[test]
fn sort_flags_map_to_options() {
    let args = parse_list(&["dirtab", "list", "--flat", "-r", "-i", "-n", "5"]);
    assert_eq!(args.path, None);
    assert_eq!(
        args.sort_options(),
        SortOptions {
            group_directories_first: false,
            order: SortOrder::Descending,
            collation: Collation::CaseInsensitive,
        }
    );
    assert_eq!(args.limit, Some(5));
}

#[test]
fn print_table_streams_sorted_rows() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    write(tmp.path().join("b.txt"), b"").unwrap();
    create_dir(tmp.path().join("A")).unwrap();
    write(tmp.path().join("a.txt"), b"").unwrap();

    let mut ctx = ScanContext::new(
        Box::new(FixedOwner("tester".into())),
        Box::new(BufferedSink::new()),
    );
    let mut table = DirectoryTable::default();
    table.set_dirpath(tmp.path(), &mut ctx).unwrap();

    let mut printer = JsonPrinter::new(Vec::new(), Vec::new(), PrinterConfig::default());
    print_table(&table, &mut printer, 2).unwrap();

    let (out, err) = printer.into_parts();
    let names: Vec<String> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| {
            let v: serde_json::Value = serde_json::from_str(l).unwrap();
            v["name"].as_str().unwrap().to_owned()
        })
        .collect();
    assert_eq!(names, vec!["A", "a.txt"]);

    let summary: serde_json::Value =
        serde_json::from_str(String::from_utf8(err).unwrap().trim()).unwrap();
    assert_eq!(summary["total"], 3);
    assert_eq!(summary["truncated"], true);
    assert_eq!(summary["folders"], 1);
    assert_eq!(summary["files"], 2);
}
