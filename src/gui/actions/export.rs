// src/gui/actions/export.rs
use crate::{config::options::{ExportFormat, ExportOptions}, file, gui::app::App};

/// Write the rows currently on screen to the "Export view" path.
pub fn export(app: &mut App) {
    if app.row_ix.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let mut ds = super::view_dataset(app);
    let mut opts = ExportOptions::default();
    opts.set_path(&app.view_path_text);
    opts.format = ExportFormat::from_path(&opts.out_path());
    opts.include_headers = app.state.options.export.include_headers;
    if !opts.include_headers {
        ds.headers = None;
    }

    let msg = match file::write_table(&opts, &ds) {
        Ok(path) => format!("Exported {} rows → {}", ds.row_count(), path.display()),
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
