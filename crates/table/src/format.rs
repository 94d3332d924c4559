use std::fmt;

use chrono::{DateTime, Local};

/// Value handed to the presentation layer for one table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(u64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{n}"),
        }
    }
}

/// `YYYY-MM-DD HH:MM` in local time. Out-of-range timestamps render empty.
pub fn format_timestamp(secs: i64) -> String {
    match DateTime::from_timestamp(secs, 0) {
        Some(utc) => utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => String::new(),
    }
}

const S_IFMT: u32 = 0o170000;

fn type_char(mode: u32) -> char {
    match mode & S_IFMT {
        0o040000 => 'd',
        0o100000 => '-',
        0o120000 => 'l',
        0o020000 => 'c',
        0o060000 => 'b',
        0o010000 => 'p',
        0o140000 => 's',
        _ => '?',
    }
}

/// `ls -l` style rendering, e.g. `drwxr-xr-x`.
pub fn format_mode(mode: u32) -> String {
    let mut out = String::with_capacity(10);
    out.push(type_char(mode));

    // (shift, special bit, letter when exec is set)
    let triples = [(6, 0o4000, 's'), (3, 0o2000, 's'), (0, 0o1000, 't')];

    for (shift, special, letter) in triples {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });

        let exec = bits & 0o1 != 0;
        out.push(match (mode & special != 0, exec) {
            (true, true) => letter,
            (true, false) => letter.to_ascii_uppercase(),
            (false, true) => 'x',
            (false, false) => '-',
        });
    }

    out
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
