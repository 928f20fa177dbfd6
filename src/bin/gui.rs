// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use court_scrape::{
    config::{AppOptions, consts::CONFIG_FILE},
    gui, log,
};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init(false);

    let options = match AppOptions::load_or_default(Path::new(CONFIG_FILE)) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(1);
        }
    };

    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Open Courts")
            .with_inner_size([1100.0, 700.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
