// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    /// Start of a field, or inside an unquoted one
    Bare,
    Quoted,
    /// Just saw a '"' inside a quoted field: escape or close
    QuoteInQuoted,
}

/// Minimal CSV/TSV reader: quoted fields, doubled quotes, CRLF, a leading BOM.
/// Blank lines are dropped. An unterminated quote runs to end of input.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = s!();
    let mut state = State::Bare;
    let mut prev_cr = false;

    let mut end_row = |row: &mut Vec<String>, field: &mut String| {
        row.push(take(field));
        let blank = row.len() == 1 && row[0].is_empty();
        if blank { row.clear(); } else { rows.push(take(row)); }
    };

    for ch in text.chars() {
        let after_cr = take(&mut prev_cr);
        state = match (state, ch) {
            (State::Quoted, '"') => State::QuoteInQuoted,
            (State::Quoted, c) => { field.push(c); State::Quoted }
            (State::QuoteInQuoted, '"') => { field.push('"'); State::Quoted }
            (_, '"') if field.is_empty() => State::Quoted,
            (_, c) if c == sep => { row.push(take(&mut field)); State::Bare }
            (_, '\n') if after_cr => State::Bare,
            (_, '\r' | '\n') => {
                prev_cr = ch == '\r';
                end_row(&mut row, &mut field);
                State::Bare
            }
            (_, c) => { field.push(c); State::Bare }
        };
    }
    if !field.is_empty() || !row.is_empty() || state == State::Quoted {
        end_row(&mut row, &mut field);
    }
    rows
}

/// Split off the first row as headers when it names the first column.
pub fn split_headers(mut rows: Vec<Vec<String>>, first_header: &str) -> (Option<Vec<String>>, Vec<Vec<String>>) {
    let is_header = rows
        .first()
        .and_then(|r| r.first())
        .is_some_and(|c| c.trim().eq_ignore_ascii_case(first_header));
    if is_header {
        let header = rows.remove(0);
        return (Some(header), rows);
    }
    (None, rows)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.chars().any(|c| c == sep || matches!(c, '"' | '\n' | '\r'))
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().map(AsRef::as_ref).enumerate() {
        if i > 0 {
            write!(w, "{sep}")?;
        }
        match needs_quotes(cell, sep) {
            true => write!(w, "\"{}\"", cell.replace('"', "\"\""))?,
            false => w.write_all(cell.as_bytes())?,
        }
    }
    writeln!(w)
}

/// Stringify a table (clipboard, in-memory export).
pub fn rows_to_string(headers: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    for r in headers.into_iter().chain(rows.iter().map(Vec::as_slice)) {
        // Vec<u8> writes can't fail
        let _ = write_row(&mut buf, r, sep);
    }

    // write_row only ever writes &str content
    String::from_utf8(buf).unwrap_or_default()
}
