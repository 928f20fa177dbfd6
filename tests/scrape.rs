// tests/scrape.rs
//
// Orchestration over canned pages: no network, no pauses.
use std::cell::RefCell;
use std::collections::HashMap;

use chrono::NaiveDate;

use court_scrape::config::options::{Association, Club, ScrapeOptions};
use court_scrape::core::net::{Fetch, FetchError};
use court_scrape::progress::Progress;
use court_scrape::scrape::collect_slots;

struct CannedFetcher {
    pages: HashMap<String, String>,
    requested: RefCell<Vec<String>>,
}

impl CannedFetcher {
    fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: pages.iter().map(|(u, p)| (u.to_string(), p.to_string())).collect(),
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl Fetch for CannedFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.requested.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status { url: url.to_string(), status: 503 })
    }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<(String, usize)>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, club: &str, slots: usize) { self.done.push((club.to_string(), slots)); }
    fn item_failed(&mut self, club: &str, _error: &str) { self.failed.push(club.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

fn opts(clubs: &[(&str, &str)]) -> ScrapeOptions {
    ScrapeOptions {
        city: "Hamburg".into(),
        clubs: clubs.iter().map(|(n, u)| Club::new(*n, *u)).collect(),
        association: Association::Forward,
        pause_ms: 0,
        ..ScrapeOptions::default()
    }
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

const PAGE_A: &str = "<h3>1 • Center Court</h3><p>2 options • Starting at 9:00 until 10:00, Starting at 11:00 until 12:00</p>";
const PAGE_C: &str = "<h3>3 • Court</h3><p>1 option • Starting at 18:00 until 19:30</p>";

#[test]
fn failed_club_is_skipped_and_the_rest_continue() {
    let fetcher = CannedFetcher::new(&[("https://a.test", PAGE_A), ("https://c.test", PAGE_C)]);
    let scrape = opts(&[("A", "https://a.test"), ("B", "https://b.test"), ("C", "https://c.test")]);
    let mut rec = Recorder::default();

    let report = collect_slots(&fetcher, &scrape, day(), Some(&mut rec));

    // Every club is attempted, in order
    assert_eq!(*fetcher.requested.borrow(), vec!["https://a.test", "https://b.test", "https://c.test"]);

    let clubs: Vec<&str> = report.slots.iter().map(|s| s.club_name.as_str()).collect();
    assert_eq!(clubs, vec!["A", "A", "C"]);
    assert!(report.slots.iter().all(|s| s.city == "Hamburg"));

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "B");
    assert!(report.failed[0].1.contains("503"));

    assert_eq!(rec.total, 3);
    assert_eq!(rec.done, vec![("A".to_string(), 2), ("C".to_string(), 1)]);
    assert_eq!(rec.failed, vec!["B"]);
    assert!(rec.finished);
}

#[test]
fn no_clubs_no_slots() {
    let fetcher = CannedFetcher::new(&[]);
    let report = collect_slots(&fetcher, &opts(&[]), day(), None);
    assert!(report.slots.is_empty());
    assert!(report.failed.is_empty());
    assert!(fetcher.requested.borrow().is_empty());
}

#[test]
fn every_club_failing_is_still_a_report() {
    let fetcher = CannedFetcher::new(&[]);
    let report = collect_slots(&fetcher, &opts(&[("A", "https://a.test"), ("B", "https://b.test")]), day(), None);
    assert!(report.slots.is_empty());
    assert_eq!(report.failed.iter().map(|(c, _)| c.as_str()).collect::<Vec<_>>(), vec!["A", "B"]);
}
