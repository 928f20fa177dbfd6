// src/gui/components/filter_panel.rs
//
// Left side panel: city, level, date and time window.
// Any change rebuilds the filtered view right away.

use eframe::egui::{self, Color32, RichText};
use egui_extras::DatePickerButton;

use crate::{data, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filter");
    ui.separator();

    let mut changed = false;
    let cities = data::cities(&app.slots);
    let levels = data::levels(&app.slots);
    let filter = &mut app.state.gui.filter;

    // City
    let mut city = filter.city.clone();
    egui::ComboBox::from_label("City")
        .selected_text(city.clone().unwrap_or_else(|| s!("—")))
        .show_ui(ui, |ui| {
            for c in &cities {
                ui.selectable_value(&mut city, Some(c.clone()), c.as_str());
            }
        });
    if city != filter.city {
        logf!("UI: City → {:?}", city);
        filter.city = city;
        changed = true;
    }

    // Level ("All" = None)
    let mut level = filter.level.clone();
    egui::ComboBox::from_label("Level")
        .selected_text(level.clone().unwrap_or_else(|| s!("All")))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut level, None, "All");
            for l in &levels {
                ui.selectable_value(&mut level, Some(l.clone()), l.as_str());
            }
        });
    if level != filter.level {
        logf!("UI: Level → {:?}", level);
        filter.level = level;
        changed = true;
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label("Desired date");
        if ui.add(DatePickerButton::new(&mut filter.date).id_salt("desired_date")).changed() {
            logf!("UI: Date → {}", filter.date);
            changed = true;
        }
    });

    ui.add_space(6.0);
    let gui = &mut app.state.gui;
    changed |= time_field(ui, "Start after", &mut gui.start_after_text, &mut gui.filter.start_after);
    changed |= time_field(ui, "End before", &mut gui.end_before_text, &mut gui.filter.end_before);

    if changed {
        app.rebuild_view();
    }
}

/// `HH:MM` text box; the filter only moves when the text parses.
fn time_field(ui: &mut egui::Ui, label: &str, text: &mut String, value: &mut chrono::NaiveTime) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let resp = ui.add(egui::TextEdit::singleline(text).desired_width(60.0));
        match data::parse_clock(text) {
            Some(t) => {
                if resp.changed() && t != *value {
                    *value = t;
                    changed = true;
                }
            }
            None => {
                ui.label(RichText::new("HH:MM").color(Color32::from_rgb(0xDC, 0x61, 0x49)));
            }
        }
    });
    changed
}
