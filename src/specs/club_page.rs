// src/specs/club_page.rs
//
// Public club page → open slots.
//
// The page renders one card per court:
//
//   1 • Center Court
//   2 options • Starting at 14:30 until 18:00
//
// There is no date on the page, so every time is read as "today" (the
// caller's reference date). Pairing a court label with its availability text
// is forward-only by default; see `Association`.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate, NaiveTime};
use regex::Regex;

use crate::config::{Association, ScrapeOptions, consts::SURFACE_KEYWORD};
use crate::core::html::{TextNode, text_nodes};
use crate::slot::SlotRecord;

static AVAILABILITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"options?\s*•|Starting").expect("availability pattern"));

/// Where a label stops when its node also carries the availability text.
/// Swallows the option count so "… 2 options •" doesn't leave a stray "2".
static LABEL_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\d+\s*)?options?\s*•|Starting").expect("label-end pattern"));

static TIME_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Starting\s+at\s+(\d{1,2}):(\d{2})\s+until\s+(\d{1,2}):(\d{2})")
        .expect("time-pair pattern")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Word that ends a court label, e.g. "Court" in "1 • Center Court".
    pub surface_keyword: String,
    pub association: Association,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { surface_keyword: s!(SURFACE_KEYWORD), association: Association::Forward }
    }
}

impl From<&ScrapeOptions> for ExtractOptions {
    fn from(opts: &ScrapeOptions) -> Self {
        Self { surface_keyword: opts.surface_keyword.clone(), association: opts.association }
    }
}

impl ExtractOptions {
    pub fn scoped() -> Self {
        Self { association: Association::Scoped, ..Self::default() }
    }

    fn court_pattern(&self) -> Option<Regex> {
        let kw = self.surface_keyword.trim();
        let kw = if kw.is_empty() { SURFACE_KEYWORD } else { kw };
        match Regex::new(&format!("•.*?{}", regex::escape(kw))) {
            Ok(re) => Some(re),
            Err(e) => {
                loge!("Extract: bad surface keyword {:?}: {}", kw, e);
                None
            }
        }
    }
}

/// Every "Starting at H:MM until H:MM" in `text`, left to right.
/// Occurrences with an impossible clock time are skipped.
pub fn parse_timeslot_text(text: &str) -> Vec<(NaiveTime, NaiveTime)> {
    TIME_PAIR
        .captures_iter(text)
        .filter_map(|c| {
            let start = clock(&c[1], &c[2])?;
            let end = clock(&c[3], &c[4])?;
            Some((start, end))
        })
        .collect()
}

fn clock(h: &str, m: &str) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h.parse().ok()?, m.parse().ok()?, 0)
}

/// Extract open slots from a club page, dating them on `today`.
///
/// Never fails: markup that doesn't look like a club page just yields fewer
/// (or zero) records. Records come out in document order.
pub fn extract(
    markup: &str,
    club_name: &str,
    city: &str,
    today: NaiveDate,
    opts: &ExtractOptions,
) -> Vec<SlotRecord> {
    let Some(court_re) = opts.court_pattern() else { return Vec::new() };
    let nodes = text_nodes(markup);
    let mut slots = Vec::new();

    for (i, node) in nodes.iter().enumerate() {
        let cut = LABEL_END.find(&node.text).map_or(node.text.len(), |m| m.start());
        let head = &node.text[..cut];
        if !court_re.is_match(head) { continue; }
        let label = trim_label(head);

        let Some(avail) = find_availability(&nodes, i, cut, opts.association) else {
            logd!("Extract: {club_name}: no availability after {label:?}");
            continue;
        };

        for (start, end) in parse_timeslot_text(avail) {
            slots.push(SlotRecord::new(city, club_name, label, today, start, end));
        }
    }

    logd!("Extract: {club_name}: {} text nodes → {} slots", nodes.len(), slots.len());
    slots
}

/// Drop whitespace and filler punctuation left between a label and the
/// availability text ("1 • Center Court ... 2 options").
fn trim_label(head: &str) -> &str {
    head.trim_end_matches(|c: char| c.is_whitespace() || matches!(c, '.' | '…' | '·' | ',' | ':' | ';' | '-' | '|'))
        .trim_start()
}

/// `extract` against the local wall-clock date.
pub fn extract_today(markup: &str, club_name: &str, city: &str, opts: &ExtractOptions) -> Vec<SlotRecord> {
    extract(markup, club_name, city, Local::now().date_naive(), opts)
}

/// First availability text after the label at `nodes[at]`, starting with the
/// rest of the label's own node.
fn find_availability<'n>(
    nodes: &'n [TextNode],
    at: usize,
    label_end: usize,
    association: Association,
) -> Option<&'n str> {
    let label = &nodes[at];
    let own_rest = &label.text[label_end..];
    if AVAILABILITY.is_match(own_rest) {
        return Some(own_rest);
    }

    // The card is the element around the label's own element, or the label's
    // element itself when it sits at the top. Bare top-level text has no card.
    let card = match association {
        Association::Forward => None,
        Association::Scoped => Some(label.ancestor(2).or_else(|| label.parent())?),
    };

    for node in &nodes[at + 1..] {
        if let Some(card) = card {
            // Document order: once outside the card we never re-enter it
            if !node.is_within(card) { return None; }
        }
        if AVAILABILITY.is_match(&node.text) {
            return Some(&node.text);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn timeslot_text_pairs_in_order() {
        let pairs = parse_timeslot_text(
            "3 options • Starting at 9:00 until 10:30, Starting at 14:30 until 18:00",
        );
        assert_eq!(pairs, vec![(hm(9, 0), hm(10, 30)), (hm(14, 30), hm(18, 0))]);
    }

    #[test]
    fn malformed_occurrence_is_skipped_not_fatal() {
        let pairs = parse_timeslot_text(
            "Starting at 9 until 18:00 • Starting at 25:00 until 26:00 • Starting at 7:15 until 8:15",
        );
        assert_eq!(pairs, vec![(hm(7, 15), hm(8, 15))]);
    }

    #[test]
    fn label_stops_at_availability_text() {
        let slots = extract(
            "1 • Center Court ... 2 options • Starting at 14:30 until 18:00",
            "Club A",
            "Hamburg",
            day(),
            &ExtractOptions::default(),
        );
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].court_name, "1 • Center Court");
        assert_eq!(slots[0].start_text(), "2024-06-03 14:30");
    }

    #[test]
    fn custom_surface_keyword() {
        let html = "<h3>3 • Pista Cristal</h3><p>1 option • Starting at 8:00 until 9:00</p>";
        assert!(extract(html, "C", "X", day(), &ExtractOptions::default()).is_empty());

        let opts = ExtractOptions { surface_keyword: s!("Pista"), ..ExtractOptions::default() };
        let slots = extract(html, "C", "X", day(), &opts);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].court_name, "3 • Pista Cristal");
    }

    #[test]
    fn keyword_mid_label_keeps_whole_label() {
        let html = "<h3>2 • Court Panorama</h3><p>Starting at 10:00 until 11:00</p>\
                    <h3>1 • Center Court (Indoor)</h3><p>1 option • Starting at 12:00 until 13:00</p>";
        let slots = extract(html, "C", "X", day(), &ExtractOptions::default());
        let courts: Vec<&str> = slots.iter().map(|s| s.court_name.as_str()).collect();
        assert_eq!(courts, ["2 • Court Panorama", "1 • Center Court (Indoor)"]);
    }

    #[test]
    fn keyword_only_inside_availability_is_not_a_label() {
        let html = "<p>2 options • Starting at 9:00 until 10:00 on Court 4</p>";
        assert!(extract(html, "C", "X", day(), &ExtractOptions::default()).is_empty());
    }

    #[test]
    fn today_helper_dates_on_local_clock() {
        let slots = extract_today("1 • Court: Starting at 6:00 until 7:00", "C", "X", &ExtractOptions::default());
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].start_time.time(), hm(6, 0));
        assert!(slots[0].start_time.date() >= day());
    }

    #[test]
    fn scoped_stays_inside_card() {
        let html = "<div class=card><h3>1 • Center Court</h3><p>Fully booked</p></div>\
                    <div class=card><h3>Padel 2</h3><p>1 option • Starting at 10:00 until 11:00</p></div>";
        let forward = extract(html, "C", "X", day(), &ExtractOptions::default());
        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].court_name, "1 • Center Court");

        let scoped = extract(html, "C", "X", day(), &ExtractOptions::scoped());
        assert!(scoped.is_empty());
    }

    #[test]
    fn scoped_top_level_label_stays_in_its_element() {
        let html = "<h3>1 • Center Court</h3><p>Fully booked</p>\
                    <div><h3>Padel 2</h3><p>1 option • Starting at 10:00 until 11:00</p></div>";
        assert_eq!(extract(html, "C", "X", day(), &ExtractOptions::default()).len(), 1);
        assert!(extract(html, "C", "X", day(), &ExtractOptions::scoped()).is_empty());

        // Availability inside the label's own element still counts
        let inline = "<h3>1 • Center Court <small>Starting at 8:00 until 9:00</small></h3>";
        assert_eq!(extract(inline, "C", "X", day(), &ExtractOptions::scoped()).len(), 1);
    }

    #[test]
    fn scoped_bare_label_only_reads_its_own_text() {
        let own = "1 • Center Court, 1 option • Starting at 8:00 until 9:00";
        let slots = extract(own, "C", "X", day(), &ExtractOptions::scoped());
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].court_name, "1 • Center Court");

        let split = "1 • Center Court<p>Starting at 8:00 until 9:00</p>";
        assert_eq!(extract(split, "C", "X", day(), &ExtractOptions::default()).len(), 1);
        assert!(extract(split, "C", "X", day(), &ExtractOptions::scoped()).is_empty());
    }
}
