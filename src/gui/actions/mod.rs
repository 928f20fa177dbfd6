// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,scrape,join}.

mod copy;     // src/gui/actions/copy.rs
mod export;   // src/gui/actions/export.rs
mod scrape;   // src/gui/actions/scrape.rs
mod waitlist; // src/gui/actions/waitlist.rs

pub use copy::copy;
pub use export::export;
pub use scrape::{finish_scrape, scrape};
pub use waitlist::join;

use crate::{gui::app::App, store::DataSet};

/// The current filtered view as a table (headers always on).
pub(super) fn view_dataset(app: &App) -> DataSet {
    DataSet::from_slots(&app.view().to_owned_slots())
}
