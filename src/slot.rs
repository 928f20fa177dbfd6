// src/slot.rs
//
// The one domain record, and its fixed tabular shape.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::consts::TIMESTAMP_FMT;

/// Column order shared by the sink, the dashboard and the waitlist.
pub const HEADERS: [&str; 7] = [
    "city", "club_name", "court_name", "start_time", "end_time", "level", "free_slots",
];

pub const CITY_COL: usize = 0;
pub const LEVEL_COL: usize = 5;

/// One advertised open time window on one court.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlotRecord {
    pub city: String,
    pub club_name: String,
    pub court_name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub level: Option<String>,
    pub free_slots: Option<u32>,
}

impl SlotRecord {
    /// A freshly extracted slot: level and free slots are never known yet.
    pub fn new(
        city: &str,
        club_name: &str,
        court_name: &str,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Self {
        Self {
            city: s!(city),
            club_name: s!(club_name),
            court_name: s!(court_name),
            start_time: date.and_time(start),
            end_time: date.and_time(end),
            level: None,
            free_slots: None,
        }
    }

    pub fn headers() -> Vec<String> {
        HEADERS.iter().map(|h| s!(*h)).collect()
    }

    pub fn start_text(&self) -> String {
        self.start_time.format(TIMESTAMP_FMT).to_string()
    }

    pub fn end_text(&self) -> String {
        self.end_time.format(TIMESTAMP_FMT).to_string()
    }

    /// Serialize in `HEADERS` order; unknown optionals become empty cells.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.city.clone(),
            self.club_name.clone(),
            self.court_name.clone(),
            self.start_text(),
            self.end_text(),
            self.level.clone().unwrap_or_default(),
            self.free_slots.map(|n| n.to_string()).unwrap_or_default(),
        ]
    }

    /// Parse a row in `HEADERS` order. Trailing optional columns may be
    /// missing. Returns `None` when a required field is absent or a
    /// timestamp doesn't parse.
    pub fn from_row(row: &[String]) -> Option<Self> {
        let cell = |i: usize| row.get(i).map(|c| c.trim()).unwrap_or("");
        let optional = |i: usize| Some(cell(i)).filter(|c| !c.is_empty());

        let (city, club, court) = (cell(0), cell(1), cell(2));
        if city.is_empty() || club.is_empty() || court.is_empty() {
            return None;
        }
        Some(Self {
            city: s!(city),
            club_name: s!(club),
            court_name: s!(court),
            start_time: parse_timestamp(cell(3))?,
            end_time: parse_timestamp(cell(4))?,
            level: optional(LEVEL_COL).map(String::from),
            // Sheets sometimes hand back "4.0"
            free_slots: optional(6).and_then(|c| {
                c.parse::<u32>().ok().or_else(|| {
                    c.parse::<f64>().ok().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u32)
                })
            }),
        })
    }
}

/// `YYYY-MM-DD HH:MM`, tolerating seconds and a `T` separator.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    const FALLBACKS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FMT)
        .ok()
        .or_else(|| FALLBACKS.iter().find_map(|f| NaiveDateTime::parse_from_str(s, f).ok()))
}
