// src/file.rs
//
// Sink side: write slot tables where ExportOptions says.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::error::{Error, Result};
use crate::slot::SlotRecord;
use crate::store::{self, DataSet};

/// Write `slots` to `export.out_path()` (CSV/TSV, header per options).
/// Returns the final path written to.
pub fn write_slots(export: &ExportOptions, slots: &[SlotRecord]) -> Result<PathBuf> {
    let mut ds = DataSet::from_slots(slots);
    if !export.include_headers {
        ds.headers = None;
    }
    write_table(export, &ds)
}

/// Write an already-shaped table (e.g. a filtered dashboard view).
pub fn write_table(export: &ExportOptions, ds: &DataSet) -> Result<PathBuf> {
    let path = export.out_path();
    store::save_dataset(&path, ds, export.delim())?;
    logf!("Export: wrote {} rows → {}", ds.row_count(), path.display());
    Ok(path)
}

/// Ensure the directory holding `path` exists.
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::InvalidInput(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
