// tests/store.rs
//
// Dashboard sources: local files and published-sheet URLs.
use std::fs;

use court_scrape::core::net::{Fetch, FetchError};
use court_scrape::store::{DataSet, is_url, load_slots_from_source};

const SHEET: &str = "\u{feff}city,club_name,court_name,start_time,end_time,level,free_slots\r\n\
Hamburg,Club A,1 • Center Court,2024-06-03 14:30:00,2024-06-03 18:00:00,B,3.0\r\n\
Hamburg,Club A,2 • Court,not a time,2024-06-03 18:00,,\r\n\
Hamburg,Club B,3 • Court,2024-06-03 08:00,2024-06-03 09:00\r\n";

struct Sheet;

impl Fetch for Sheet {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        if url.ends_with("output=csv") {
            Ok(SHEET.to_string())
        } else {
            Err(FetchError::Status { url: url.to_string(), status: 404 })
        }
    }
}

#[test]
fn url_source_goes_through_the_fetcher() {
    let slots = load_slots_from_source("https://docs.example.test/pub?output=csv", &Sheet).unwrap();

    // The unparsable row is dropped, the short row keeps empty optionals
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].court_name, "1 • Center Court");
    assert_eq!(slots[0].start_text(), "2024-06-03 14:30");
    assert_eq!(slots[0].level.as_deref(), Some("B"));
    assert_eq!(slots[0].free_slots, Some(3));
    assert_eq!(slots[1].club_name, "Club B");
    assert_eq!(slots[1].level, None);
    assert_eq!(slots[1].free_slots, None);
}

#[test]
fn url_fetch_failure_is_an_error() {
    let err = load_slots_from_source("https://docs.example.test/missing", &Sheet).unwrap_err();
    assert!(err.to_string().contains("404"));
}

#[test]
fn file_source_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matches.csv");
    fs::write(&path, SHEET).unwrap();

    let slots = load_slots_from_source(path.to_str().unwrap(), &Sheet).unwrap();
    assert_eq!(slots.len(), 2);

    let again = DataSet::from_slots(&slots).to_slots();
    assert_eq!(again, slots);
}

#[test]
fn missing_file_and_blank_source_are_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_slots_from_source(dir.path().join("nope.csv").to_str().unwrap(), &Sheet).is_err());
    assert!(load_slots_from_source("  ", &Sheet).is_err());
}

#[test]
fn url_detection() {
    assert!(is_url("https://example.test/a.csv"));
    assert!(is_url("  HTTP://example.test"));
    assert!(!is_url("open_matches.csv"));
    assert!(!is_url("./https/file.csv"));
}
