// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use chrono::Local;
use eframe::egui;

use crate::{
    config::{consts::MATCHES_TTL_SECS, options::AppOptions, state::AppState},
    core::net::HttpFetcher,
    data::FilteredView,
    scrape::ScrapeReport,
    slot::SlotRecord,
    store,
};

use super::{actions, components};

/// Result handed back from the scrape worker thread.
pub type ScrapeOutcome = Result<ScrapeReport, String>;

pub fn run(native: eframe::NativeOptions, options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Open Court Slots",
        native,
        Box::new(|_cc| Ok(Box::new(App::new(options)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded slot table + current filtered view (indexes into `slots`)
    pub slots: Vec<SlotRecord>,
    pub row_ix: Vec<usize>,
    pub loaded_at: Option<Instant>,

    // "Export view" target (text field UX)
    pub view_path_text: String,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub pending: Arc<Mutex<Option<ScrapeOutcome>>>,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        let today = Local::now().date_naive();
        let mut app = Self {
            state: AppState::new(options, today),
            slots: Vec::new(),
            row_ix: Vec::new(),
            loaded_at: None,
            view_path_text: s!("filtered_matches.csv"),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            pending: Arc::new(Mutex::new(None)),
        };
        logf!("Init: source={:?} clubs={}", app.state.options.dashboard.source, app.state.options.scrape.clubs.len());
        app.reload();
        app
    }

    /* ---------- tiny helpers ---------- */

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn view(&self) -> FilteredView<'_> {
        FilteredView::from_indices(&self.slots, self.row_ix.clone())
    }

    pub fn selected_slot(&self) -> Option<&SlotRecord> {
        self.state.gui.selected.and_then(|ix| self.slots.get(ix))
    }

    /// Re-read the dashboard source (file or published sheet).
    pub fn reload(&mut self) {
        let source = self.state.options.dashboard.source.clone();
        let loaded = HttpFetcher::new()
            .map_err(crate::Error::from)
            .and_then(|f| store::load_slots_from_source(&source, &f));
        self.loaded_at = Some(Instant::now());

        match loaded {
            Ok(slots) => {
                let n = slots.len();
                self.replace_slots(slots);
                self.status(format!("Loaded {n} slots from {source}"));
            }
            Err(e) => {
                loge!("Load: {}: {}", source, e);
                self.replace_slots(Vec::new());
                self.status(format!("Could not load {source}: {e}"));
            }
        }
    }

    pub fn replace_slots(&mut self, slots: Vec<SlotRecord>) {
        self.slots = slots;
        self.state.gui.selected = None;
        self.rebuild_view();
    }

    /// Recompute the filtered view after data or filter changes.
    pub fn rebuild_view(&mut self) {
        self.state.gui.filter.reconcile(&self.slots);
        self.row_ix = FilteredView::new(&self.slots, &self.state.gui.filter).row_ix;
        if let Some(sel) = self.state.gui.selected {
            if !self.row_ix.contains(&sel) {
                self.state.gui.selected = None;
            }
        }
        logd!("View: {} of {} slots", self.row_ix.len(), self.slots.len());
    }

    fn poll_worker(&mut self) {
        let outcome = self.pending.lock().ok().and_then(|mut p| p.take());
        if let Some(outcome) = outcome {
            self.running = false;
            actions::finish_scrape(self, outcome);
        }
    }

    fn stale(&self) -> bool {
        self.loaded_at
            .is_some_and(|t| t.elapsed() >= Duration::from_secs(MATCHES_TTL_SECS))
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();
        if !self.running && self.stale() {
            logd!("Load: source older than {}s, reloading", MATCHES_TTL_SECS);
            self.reload();
        }

        egui::SidePanel::left("filters")
            .resizable(false)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self);
            });

        egui::TopBottomPanel::top("actions").show(ctx, |ui| {
            components::action_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("waitlist").show(ctx, |ui| {
            components::waitlist_form::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::data_table::draw(ui, self);
        });

        if self.running {
            ctx.request_repaint_after(Duration::from_millis(200));
        } else {
            ctx.request_repaint_after(Duration::from_secs(MATCHES_TTL_SECS));
        }
    }
}
