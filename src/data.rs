// src/data.rs
//
// Dashboard-side view of the slot table.
//
// - SlotFilter: what the visitor picked in the side panel.
// - FilteredView: row indexes into the loaded slots that pass the filter.
//   The slots themselves are never copied or mutated by filtering.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::consts::CLOCK_FMT;
use crate::slot::SlotRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotFilter {
    /// `None` only when there is nothing to pick from.
    pub city: Option<String>,
    /// `None` = all levels.
    pub level: Option<String>,
    pub date: NaiveDate,
    pub start_after: NaiveTime,
    pub end_before: NaiveTime,
}

impl SlotFilter {
    /// Whole-day window on `date`, no city or level chosen yet.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            city: None,
            level: None,
            date,
            start_after: NaiveTime::default(),
            end_before: NaiveTime::from_hms_opt(23, 59, 0).unwrap_or_default(),
        }
    }

    pub fn window(&self) -> (NaiveDateTime, NaiveDateTime) {
        (self.date.and_time(self.start_after), self.date.and_time(self.end_before))
    }

    /// City must match, level must match when chosen, and the slot must
    /// sit inside the date's time window (bounds inclusive).
    pub fn matches(&self, slot: &SlotRecord) -> bool {
        let Some(city) = &self.city else { return false };
        if slot.city != *city { return false; }
        if let Some(level) = &self.level {
            if slot.level.as_ref() != Some(level) { return false; }
        }
        let (lo, hi) = self.window();
        slot.start_time >= lo && slot.end_time <= hi
    }

    /// Keep the chosen city if it still exists, otherwise pick the first.
    pub fn reconcile(&mut self, slots: &[SlotRecord]) {
        let cities = cities(slots);
        if !self.city.as_ref().is_some_and(|c| cities.contains(c)) {
            self.city = cities.into_iter().next();
        }
        let levels = levels(slots);
        if self.level.as_ref().is_some_and(|l| !levels.contains(l)) {
            self.level = None;
        }
    }
}

/// Unique cities, first-seen order.
pub fn cities(slots: &[SlotRecord]) -> Vec<String> {
    unique(slots.iter().map(|s| s.city.as_str()))
}

/// Unique non-empty levels, first-seen order.
pub fn levels(slots: &[SlotRecord]) -> Vec<String> {
    unique(slots.iter().filter_map(|s| s.level.as_deref()))
}

fn unique<'a>(it: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in it {
        let v = v.trim();
        if !v.is_empty() && !out.iter().any(|o| o == v) {
            out.push(s!(v));
        }
    }
    out
}

/// `HH:MM` (or `H:MM`) from a text field.
pub fn parse_clock(text: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text.trim(), CLOCK_FMT).ok()
}

/// Zero-copy filtered view for display.
#[derive(Clone, Debug)]
pub struct FilteredView<'a> {
    /// Positions of kept rows in the loaded slots
    pub row_ix: Vec<usize>,
    slots: &'a [SlotRecord],
}

impl<'a> FilteredView<'a> {
    pub fn new(slots: &'a [SlotRecord], filter: &SlotFilter) -> Self {
        let row_ix = slots
            .iter()
            .enumerate()
            .filter(|(_, s)| filter.matches(s))
            .map(|(i, _)| i)
            .collect();
        Self { row_ix, slots }
    }

    pub fn from_indices(slots: &'a [SlotRecord], row_ix: Vec<usize>) -> Self {
        Self { row_ix, slots }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a slot by view position.
    pub fn get(&self, i: usize) -> Option<&'a SlotRecord> {
        self.row_ix.get(i).and_then(|&ix| self.slots.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a SlotRecord> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.slots.get(ix))
    }

    /// Materialize owned records (export boundary).
    pub fn to_owned_slots(&self) -> Vec<SlotRecord> {
        self.iter().cloned().collect()
    }
}
