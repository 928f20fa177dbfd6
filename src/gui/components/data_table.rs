// src/gui/components/data_table.rs
//
// The filtered slot table. Purely a view, except that clicking a row
// selects it for the waitlist form.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::App, slot::HEADERS};

const WIDTHS: [f32; 7] = [90.0, 170.0, 150.0, 130.0, 130.0, 60.0, 70.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let title = match &app.state.gui.filter.city {
        Some(city) => format!("Available Matches in {city}"),
        None => s!("Available Matches"),
    };
    ui.heading(title);
    ui.label("Select a match below to join the waitlist.");
    ui.add_space(4.0);

    if app.row_ix.is_empty() {
        ui.label(RichText::new("No matches available for the selected filters.").italics());
        return;
    }

    let selected = app.state.gui.selected;
    let mut clicked: Option<usize> = None;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .sense(egui::Sense::click())
        .cell_layout(Layout::left_to_right(Align::Center));
    for w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(30.0));
    }

    table
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.row_ix.len(), |mut row| {
                let Some(&src_ix) = app.row_ix.get(row.index()) else { return };
                let Some(slot) = app.slots.get(src_ix) else { return };

                row.set_selected(selected == Some(src_ix));
                for cell in slot.to_row() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        ui.label(cell);
                    });
                }
                if row.response().clicked() {
                    clicked = Some(src_ix);
                }
            });
        });

    if let Some(ix) = clicked {
        // Second click on the same row clears the selection
        app.state.gui.selected = if selected == Some(ix) { None } else { Some(ix) };
        logd!("UI: Selected slot {:?}", app.state.gui.selected);
    }
}
