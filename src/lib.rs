// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod csv;
pub mod data;
pub mod file;
pub mod gui;
pub mod progress;
pub mod scrape;
pub mod slot;
pub mod store;
pub mod waitlist;

pub use error::{Error, Result};
pub use slot::SlotRecord;
