// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Mirrors scrape progress into the status line (worker thread → UI).
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn item_done(&mut self, club: &str, slots: usize) {
        self.done += 1;
        self.set_status(format!("Fetched {} → {} slots ({}/{})", club, slots, self.done + self.failed, self.total));
    }
    fn item_failed(&mut self, club: &str, _error: &str) {
        self.failed += 1;
        self.set_status(format!("Failed {} ({}/{})", club, self.done + self.failed, self.total));
    }
    fn finish(&mut self) {
        if self.failed == 0 {
            self.set_status(format!("Fetch complete ({}/{})", self.done, self.total));
        } else {
            self.set_status(format!("Fetch complete ({}/{}, {} failed)", self.done, self.total, self.failed));
        }
    }
}
