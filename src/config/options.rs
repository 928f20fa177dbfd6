// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::*;
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
    pub dashboard: DashboardOptions,
}

impl AppOptions {
    /// Parse a TOML config file. Missing sections fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Like `load`, but a missing file just means "defaults".
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            logd!("Config: {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let opts = Self::load(path)?;
        logf!("Config: loaded {} (clubs={})", path.display(), opts.scrape.clubs.len());
        Ok(opts)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Club {
    pub name: String,
    pub url: String,
}

impl Club {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self { name: name.into(), url: url.into() }
    }

    /// `NAME=URL` as accepted on the command line.
    pub fn parse_pair(s: &str) -> Result<Self> {
        let (name, url) = s.split_once('=').ok_or_else(|| {
            crate::Error::InvalidInput(format!("expected NAME=URL, got {s:?}"))
        })?;
        let (name, url) = (name.trim(), url.trim());
        if name.is_empty() || url.is_empty() {
            return Err(crate::Error::InvalidInput(format!("empty club name or url in {s:?}")));
        }
        Ok(Self::new(name, url))
    }
}

pub fn default_clubs() -> Vec<Club> {
    DEFAULT_CLUBS.iter().map(|(name, url)| Club::new(*name, *url)).collect()
}

/// How a court label is paired with its availability text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Association {
    /// First availability text anywhere after the label, in document order.
    #[default]
    Forward,
    /// Only availability text inside the label's enclosing card.
    Scoped,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    pub city: String,
    pub clubs: Vec<Club>,
    pub association: Association,
    pub surface_keyword: String,
    pub pause_ms: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            city: s!(DEFAULT_CITY),
            clubs: default_clubs(),
            association: Association::Forward,
            surface_keyword: s!(SURFACE_KEYWORD),
            pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    /// Guess from a file name; anything that isn't `.tsv` reads as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(e) if e.eq_ignore_ascii_case("tsv") => ExportFormat::Tsv,
            _ => ExportFormat::Csv,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: PathBuf,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// Final output path. A `.csv`/`.tsv` (or missing) extension follows the
    /// format; any other extension the user typed is kept as-is.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.clone();
        let follow_format = match path.extension().and_then(|e| e.to_str()) {
            None => true,
            Some(e) => e.eq_ignore_ascii_case("csv") || e.eq_ignore_ascii_case("tsv"),
        };
        if follow_format {
            path.set_extension(self.format.ext());
        }
        path
    }

    pub fn set_path(&mut self, text: &str) {
        self.out_path = PathBuf::from(text.trim());
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardOptions {
    /// Local CSV path or an http(s) URL of a published sheet.
    pub source: String,
    pub waitlist: PathBuf,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            source: s!(DEFAULT_OUT_FILE),
            waitlist: PathBuf::from(DEFAULT_WAITLIST_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_overrides_only_what_it_names() {
        let opts = AppOptions::from_toml(
            r#"
            [scrape]
            city = "Berlin"
            association = "scoped"

            [[scrape.clubs]]
            name = "Halle"
            url = "https://example.test/halle"

            [export]
            format = "tsv"
            "#,
        )
        .unwrap();

        assert_eq!(opts.scrape.city, "Berlin");
        assert_eq!(opts.scrape.association, Association::Scoped);
        assert_eq!(opts.scrape.clubs, vec![Club::new("Halle", "https://example.test/halle")]);
        assert_eq!(opts.scrape.pause_ms, REQUEST_PAUSE_MS);
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert!(opts.export.include_headers);
        assert_eq!(opts.export.out_path(), PathBuf::from("open_matches.tsv"));
        assert_eq!(opts.dashboard, DashboardOptions::default());
    }

    #[test]
    fn custom_extension_survives_format_change() {
        let mut export = ExportOptions::default();
        export.set_path("out/slots.data");
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), PathBuf::from("out/slots.data"));

        export.set_path("out/slots");
        assert_eq!(export.out_path(), PathBuf::from("out/slots.tsv"));
    }

    #[test]
    fn club_pair_parsing() {
        let club = Club::parse_pair("Club A = https://example.test/a").unwrap();
        assert_eq!(club, Club::new("Club A", "https://example.test/a"));
        assert!(Club::parse_pair("no-separator").is_err());
        assert!(Club::parse_pair("=https://x").is_err());
    }
}
