// src/gui/components/waitlist_form.rs
use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.strong("Join Waitlist");

    match app.selected_slot() {
        Some(slot) => {
            ui.label(format!(
                "{} · {} · {} – {}",
                slot.club_name,
                slot.court_name,
                slot.start_text(),
                slot.end_text()
            ));
        }
        None => {
            ui.label("No match selected.");
        }
    }

    let mut submit = false;
    ui.horizontal(|ui| {
        ui.label("Your email address");
        let resp = ui.add(egui::TextEdit::singleline(&mut app.state.gui.email).desired_width(240.0));
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }
        let can_submit = app.state.gui.selected.is_some() && !app.running;
        if ui.add_enabled(can_submit, egui::Button::new("Join Waitlist")).clicked() {
            submit = true;
        }
    });

    if submit {
        actions::join(app);
    }
    ui.add_space(4.0);
}
