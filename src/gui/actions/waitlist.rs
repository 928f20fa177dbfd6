// src/gui/actions/waitlist.rs
use crate::{gui::app::App, waitlist};

/// Join the waitlist for the selected slot with the typed email.
pub fn join(app: &mut App) {
    let Some(slot) = app.selected_slot().cloned() else {
        app.status("Select a match first.");
        return;
    };

    let path = app.state.options.dashboard.waitlist.clone();
    match waitlist::join(&path, &slot, &app.state.gui.email) {
        Ok(entry) => {
            app.state.gui.email.clear();
            app.status(entry.confirmation());
        }
        Err(crate::Error::InvalidEmail(_)) => {
            app.status("Please enter a valid email address.");
        }
        Err(e) => {
            loge!("Waitlist: {}: {}", path.display(), e);
            app.status(format!("Could not join waitlist: {e}"));
        }
    }
}
