// src/specs/mod.rs
//! # Page "specs"
//!
//! Page-specific extraction rules. Each module knows where the ground truth
//! lives in one kind of page and how to read it without trusting the page's
//! structure.
//!
//! ## What lives here
//! - **Pure text extraction** over already-fetched markup. No network, no
//!   file I/O, and no clock reads outside the `*_today` helpers.
//! - **Pattern choice** (which text counts as a court label, which as an
//!   availability phrase) and how the two are paired.
//!
//! ## What does **not** live here
//! - Fetching and pacing (`scrape`), persistence (`store`, `file`), and the
//!   dashboard (`gui`).
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → scrape::collect_slots → Fetch::fetch(url)
//!                                   ↘ specs::club_page::extract(markup, …)
//!                        file::write_slots (outside of specs)
//! ```
//!
//! ## Conventions
//! - **Never fail on shape**: a page that doesn't look as expected yields
//!   fewer records, down to none.
//! - The reference date is passed in so output is reproducible.
//! - Specs are tested offline against inline fixtures.
pub mod club_page;

pub use club_page::{ExtractOptions, extract, extract_today, parse_timeslot_text};
