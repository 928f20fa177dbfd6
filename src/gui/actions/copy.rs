// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv::rows_to_string, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.row_ix.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    // Tab-separated pastes cleanly into spreadsheets
    let ds = super::view_dataset(app);
    let txt = rows_to_string(ds.headers.as_deref(), &ds.rows, '\t');
    logf!("Copy: rows={}", ds.row_count());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
