// src/waitlist.rs
//
// Append-only interest log. One row per join, no dedup, no locking.

use std::{
    fs::{self, OpenOptions},
    io::{BufWriter, Write},
    path::Path,
};

use crate::csv::write_row;
use crate::error::{Error, Result};
use crate::file::ensure_parent;
use crate::slot::{HEADERS, SlotRecord};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaitlistEntry {
    pub slot: SlotRecord,
    pub email: String,
}

impl WaitlistEntry {
    pub fn headers() -> Vec<String> {
        let mut h = SlotRecord::headers();
        h.push(s!("email"));
        h
    }

    pub fn to_row(&self) -> Vec<String> {
        let mut row = self.slot.to_row();
        row.push(self.email.clone());
        row
    }

    /// What the visitor sees after joining.
    pub fn confirmation(&self) -> String {
        format!(
            "You have been added to the waitlist for {} on {} - {}!",
            self.slot.club_name,
            self.slot.start_text(),
            self.slot.end_text()
        )
    }
}

/// Basic sanity only: an address must contain '@'.
pub fn validate_email(email: &str) -> Result<&str> {
    let email = email.trim();
    if email.contains('@') { Ok(email) } else { Err(Error::InvalidEmail(s!(email))) }
}

/// Append an entry for `slot` to the log at `path`.
/// The header row is written only when the file is new or empty.
pub fn join(path: &Path, slot: &SlotRecord, email: &str) -> Result<WaitlistEntry> {
    let email = validate_email(email)?;
    let entry = WaitlistEntry { slot: slot.clone(), email: s!(email) };

    ensure_parent(path)?;
    let fresh = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = BufWriter::new(file);
    if fresh {
        write_row(&mut out, &WaitlistEntry::headers(), ',')?;
    }
    write_row(&mut out, &entry.to_row(), ',')?;
    out.flush()?;

    logf!("Waitlist: {} joined {} / {} @ {}", entry.email, slot.club_name, slot.court_name, slot.start_text());
    Ok(entry)
}

/// Read the log back (header skipped). Rows keep their raw cells.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let text = fs::read_to_string(path)?;
    let (_, rows) = crate::csv::split_headers(crate::csv::parse_rows(&text, ','), HEADERS[0]);
    Ok(rows)
}
