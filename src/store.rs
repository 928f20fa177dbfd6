// src/store.rs
//
// Tabular files on disk (or behind a URL) ⇄ DataSet / SlotRecord.

use std::{fs, path::Path};

use crate::config::options::ExportFormat;
use crate::core::net::Fetch;
use crate::csv::{parse_rows, split_headers, write_row};
use crate::error::Result;
use crate::slot::{HEADERS, SlotRecord};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn from_slots(slots: &[SlotRecord]) -> Self {
        Self {
            headers: Some(SlotRecord::headers()),
            rows: slots.iter().map(SlotRecord::to_row).collect(),
        }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }

    /// Typed records; rows that don't parse are dropped (and logged).
    pub fn to_slots(&self) -> Vec<SlotRecord> {
        let mut out = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            match SlotRecord::from_row(row) {
                Some(rec) => out.push(rec),
                None => logd!("Store: skipping unparsable row {}: {:?}", i, row),
            }
        }
        out
    }

    pub fn parse(text: &str, sep: char) -> Self {
        let (headers, rows) = split_headers(parse_rows(text, sep), HEADERS[0]);
        Self { headers, rows }
    }
}

/// Read a CSV/TSV file; the delimiter follows the file extension.
pub fn load_dataset(path: &Path) -> Result<DataSet> {
    let text = fs::read_to_string(path)?;
    let ds = DataSet::parse(&text, ExportFormat::from_path(path).delim());
    logd!("Store: loaded {} (rows={}, headers={})", path.display(), ds.row_count(), ds.header_count());
    Ok(ds)
}

/// Overwrite `path` with `ds`, creating parent directories.
pub fn save_dataset(path: &Path, ds: &DataSet, sep: char) -> Result<()> {
    crate::file::ensure_parent(path)?;
    let file = fs::File::create(path)?;
    let mut out = std::io::BufWriter::new(file);
    if let Some(h) = &ds.headers {
        write_row(&mut out, h, sep)?;
    }
    for row in &ds.rows {
        write_row(&mut out, row, sep)?;
    }
    std::io::Write::flush(&mut out)?;
    Ok(())
}

pub fn is_url(source: &str) -> bool {
    let s = source.trim_start().to_ascii_lowercase();
    s.starts_with("http://") || s.starts_with("https://")
}

/// Load slots from a local path or a published-sheet URL (always CSV).
pub fn load_slots_from_source<F: Fetch>(source: &str, fetcher: &F) -> Result<Vec<SlotRecord>> {
    let source = source.trim();
    if source.is_empty() {
        return Err(crate::Error::InvalidInput(s!("no slot source configured")));
    }
    let ds = if is_url(source) {
        DataSet::parse(&fetcher.fetch(source)?, ',')
    } else {
        load_dataset(Path::new(source))?
    };
    let slots = ds.to_slots();
    logf!("Store: {} → {} slots ({} rows)", source, slots.len(), ds.row_count());
    Ok(slots)
}
