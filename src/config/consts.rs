// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = concat!("court_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Default clubs (public listing pages)
pub const DEFAULT_CITY: &str = "Hamburg";
pub const DEFAULT_CLUBS: &[(&str, &str)] = &[
    ("mitte — The Cabrio", "https://playtomic.com/clubs/mitte-the-cabrio"),
    ("mitte — Dolce Vita", "https://playtomic.com/clubs/mitte-dolce-vita"),
];

// Extraction
pub const SURFACE_KEYWORD: &str = "Court";
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M";
pub const CLOCK_FMT: &str = "%H:%M";

// Local store / logs
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const CONFIG_FILE: &str = "court_scrape.toml";

// Export
pub const DEFAULT_OUT_FILE: &str = "open_matches.csv";
pub const DEFAULT_WAITLIST_FILE: &str = "waitlist.csv";

// Dashboard
pub const MATCHES_TTL_SECS: u64 = 300;

// Pacing between sequential fetches
pub const REQUEST_PAUSE_MS: u64 = 750;
