// tests/filter.rs
//
// Dashboard filtering without any UI.
use chrono::{NaiveDate, NaiveTime};

use court_scrape::data::{FilteredView, SlotFilter, cities, levels, parse_clock};
use court_scrape::SlotRecord;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn slot(city: &str, start: (u32, u32), end: (u32, u32), level: Option<&str>) -> SlotRecord {
    let mut s = SlotRecord::new(city, "Club", "1 • Court", day(), hm(start.0, start.1), hm(end.0, end.1));
    s.level = level.map(String::from);
    s
}

fn sample() -> Vec<SlotRecord> {
    vec![
        slot("Hamburg", (9, 0), (10, 0), Some("B")),
        slot("Berlin", (9, 0), (10, 0), None),
        slot("Hamburg", (18, 0), (19, 30), Some("A")),
        slot("Hamburg", (8, 0), (9, 0), None),
        slot("Hamburg", (22, 0), (23, 59), Some("B")),
    ]
}

#[test]
fn bounds_are_inclusive() {
    let slots = sample();
    let mut f = SlotFilter::for_date(day());
    f.city = Some("Hamburg".into());
    f.start_after = hm(9, 0);
    f.end_before = hm(19, 30);

    assert_eq!(FilteredView::new(&slots, &f).row_ix, vec![0, 2]);

    // Whole day takes everything in the city, including the 23:59 end
    let mut all_day = SlotFilter::for_date(day());
    all_day.city = Some("Hamburg".into());
    assert_eq!(FilteredView::new(&slots, &all_day).row_ix, vec![0, 2, 3, 4]);
}

#[test]
fn other_dates_never_match() {
    let slots = sample();
    let mut f = SlotFilter::for_date(day().succ_opt().unwrap());
    f.city = Some("Hamburg".into());
    assert!(FilteredView::new(&slots, &f).is_empty());
}

#[test]
fn level_narrows_city() {
    let slots = sample();
    let mut f = SlotFilter::for_date(day());
    f.city = Some("Hamburg".into());
    f.level = Some("B".into());

    let view = FilteredView::new(&slots, &f);
    assert_eq!(view.row_ix, vec![0, 4]);
    assert!(view.iter().all(|s| s.level.as_deref() == Some("B")));
    assert_eq!(view.get(1), Some(&slots[4]));
    assert_eq!(view.get(2), None);
}

#[test]
fn choices_in_first_seen_order() {
    let slots = sample();
    assert_eq!(cities(&slots), vec!["Hamburg", "Berlin"]);
    assert_eq!(levels(&slots), vec!["B", "A"]);
}

#[test]
fn reconcile_picks_a_city_and_drops_stale_level() {
    let slots = sample();
    let mut f = SlotFilter::for_date(day());
    f.level = Some("Pro".into());
    f.reconcile(&slots);
    assert_eq!(f.city.as_deref(), Some("Hamburg"));
    assert_eq!(f.level, None);

    f.city = Some("Berlin".into());
    f.reconcile(&slots);
    assert_eq!(f.city.as_deref(), Some("Berlin"));

    f.reconcile(&[]);
    assert_eq!(f.city, None);
    assert!(FilteredView::new(&slots, &f).is_empty());
}

#[test]
fn clock_text() {
    assert_eq!(parse_clock(" 9:05 "), Some(hm(9, 5)));
    assert_eq!(parse_clock("23:59"), Some(hm(23, 59)));
    assert_eq!(parse_clock("24:00"), None);
    assert_eq!(parse_clock("noon"), None);
}
