// src/gui/actions/scrape.rs
use std::thread;

use chrono::Local;

use crate::{
    core::net::HttpFetcher,
    file,
    gui::{app::{App, ScrapeOutcome}, progress::GuiProgress},
    scrape::collect_slots,
};

/// Start a scrape on a worker thread. Clubs are still visited one at a time;
/// the thread only keeps the window responsive.
pub fn scrape(app: &mut App) {
    if app.running {
        logd!("Scrape: Clicked while running, ignoring");
        return;
    }
    let scrape_opts = app.state.options.scrape.clone();
    let status = app.status.clone();
    let pending = app.pending.clone();
    let today = Local::now().date_naive();

    logf!("Scrape: Begin clubs={}", scrape_opts.clubs.len());
    app.running = true;
    app.status("Scraping…");

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let outcome: ScrapeOutcome = HttpFetcher::new()
            .map(|fetcher| collect_slots(&fetcher, &scrape_opts, today, Some(&mut prog)))
            .map_err(|e| e.to_string());
        if let Ok(mut slot) = pending.lock() {
            *slot = Some(outcome);
        }
    });
}

/// UI-thread half: write the sink, then show the fresh table.
pub fn finish_scrape(app: &mut App, outcome: ScrapeOutcome) {
    let report = match outcome {
        Ok(r) => r,
        Err(e) => {
            loge!("Scrape: Error: {}", e);
            app.status(format!("Error: {e}"));
            return;
        }
    };

    let n = report.slots.len();
    let saved = file::write_slots(&app.state.options.export, &report.slots);
    app.replace_slots(report.slots);

    let failed = if report.failed.is_empty() {
        s!()
    } else {
        let names: Vec<&str> = report.failed.iter().map(|(c, _)| c.as_str()).collect();
        format!(" (failed: {})", names.join(", "))
    };
    match saved {
        Ok(path) => app.status(format!("Scraped {n} slots → {}{failed}", path.display())),
        Err(e) => {
            loge!("Scrape: Save failed: {}", e);
            app.status(format!("Scraped {n} slots, save failed: {e}{failed}"));
        }
    }
}
