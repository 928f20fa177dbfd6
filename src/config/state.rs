// src/config/state.rs
use chrono::NaiveDate;

use super::options::AppOptions;
use crate::data::SlotFilter;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Side-panel filter, applied to the loaded slots
    pub filter: SlotFilter,

    /// Raw text of the two time fields; parsed into `filter` when valid
    pub start_after_text: String,
    pub end_before_text: String,

    /// Selected slot, as an index into the loaded slots (not the view)
    pub selected: Option<usize>,

    /// Waitlist form
    pub email: String,
}

impl GuiState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            filter: SlotFilter::for_date(today),
            start_after_text: s!("00:00"),
            end_before_text: s!("23:59"),
            selected: None,
            email: s!(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions, today: NaiveDate) -> Self {
        Self { options, gui: GuiState::new(today) }
    }
}
