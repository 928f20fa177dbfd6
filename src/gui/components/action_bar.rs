// src/gui/components/action_bar.rs
//
// Top bar: scrape / reload / copy / export, sink format, status line.

use eframe::egui::{self, widgets::Spinner};

use crate::{config::options::ExportFormat, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let scrape_btn = ui.add_enabled(!app.running, egui::Button::new("Scrape"));
        if scrape_btn.clicked() {
            actions::scrape(app);
        }
        if app.running {
            ui.add(Spinner::new());
        }

        if ui.add_enabled(!app.running, egui::Button::new("Reload")).clicked() {
            logf!("UI: Reload");
            app.reload();
        }

        ui.separator();

        if ui.button("Copy view").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export view").clicked() {
            actions::export(app);
        }
        ui.add(egui::TextEdit::singleline(&mut app.view_path_text).desired_width(200.0));
    });

    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;
        let prev = export.format;
        ui.label("Scrape output:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        if export.format != prev {
            logf!("UI: Export format → {:?} ({})", export.format, export.out_path().display());
        }
        ui.label(export.out_path().display().to_string());

        let before = export.include_headers;
        ui.checkbox(&mut export.include_headers, "Include headers");
        if export.include_headers != before {
            logf!("UI: Include_headers → {}", export.include_headers);
        }
    });

    ui.separator();
    ui.label(app.status_text());
    ui.add_space(2.0);
}
