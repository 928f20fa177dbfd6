// src/scrape.rs
//
// Club list → fetched pages → slots. Strictly sequential: one request at a
// time with a pause in between. A failed club is logged and skipped.

use std::{thread, time::Duration};

use chrono::NaiveDate;

use crate::{
    config::options::{Club, ScrapeOptions},
    core::net::Fetch,
    progress::Progress,
    slot::SlotRecord,
    specs::club_page::{self, ExtractOptions},
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapeReport {
    /// All clubs' slots, in club order then document order.
    pub slots: Vec<SlotRecord>,
    /// Clubs that could not be fetched, with the reason.
    pub failed: Vec<(String, String)>,
}

/// Visit every configured club and extract its open slots dated `today`.
pub fn collect_slots<F: Fetch + ?Sized>(
    fetcher: &F,
    scrape: &ScrapeOptions,
    today: NaiveDate,
    mut progress: Option<&mut dyn Progress>,
) -> ScrapeReport {
    let extract_opts = ExtractOptions::from(scrape);
    let mut report = ScrapeReport::default();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(scrape.clubs.len());
    }
    logf!(
        "Scrape: begin clubs={} city={:?} association={:?} date={}",
        scrape.clubs.len(), scrape.city, scrape.association, today
    );

    for (i, Club { name, url }) in scrape.clubs.iter().enumerate() {
        if i > 0 && scrape.pause_ms > 0 {
            thread::sleep(Duration::from_millis(scrape.pause_ms)); // be polite
        }
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching {name}…"));
        }

        let markup = match fetcher.fetch(url) {
            Ok(m) => m,
            Err(e) => {
                loge!("Scrape: failed to fetch {}: {}", name, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(name, &e.to_string());
                }
                report.failed.push((name.clone(), e.to_string()));
                continue;
            }
        };

        let slots = club_page::extract(&markup, name, &scrape.city, today, &extract_opts);
        if slots.is_empty() {
            logw!("Scrape: {} → no slots ({} bytes of markup)", name, markup.len());
        } else {
            logf!("Scrape: {} → {} slots", name, slots.len());
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(name, slots.len());
        }
        report.slots.extend(slots);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("Scrape: done slots={} failed={}", report.slots.len(), report.failed.len());
    report
}
