// src/cli.rs
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};

use crate::{
    config::{
        consts::CONFIG_FILE,
        options::{AppOptions, Association, Club, ExportFormat},
    },
    core::net::HttpFetcher,
    file,
    progress::Progress,
    scrape::collect_slots,
    store, waitlist,
};

#[derive(Debug, Parser)]
#[command(name = "court_scrape", version, about = "Scrape open court slots into a table")]
pub struct Cli {
    /// TOML config (missing file = built-in defaults)
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Mirror log lines to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch every club page and write the slot table
    Scrape(ScrapeArgs),
    /// Print the configured clubs as name,url
    Clubs,
    /// Join the waitlist for one row of a slot table
    Waitlist(WaitlistArgs),
}

#[derive(Debug, Args)]
pub struct ScrapeArgs {
    #[arg(long)]
    pub city: Option<String>,

    /// Replaces the configured clubs; repeatable
    #[arg(long = "club", value_name = "NAME=URL")]
    pub clubs: Vec<String>,

    #[arg(short, long)]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    #[arg(long)]
    pub no_headers: bool,

    /// Only pair a court with availability text inside its own card
    #[arg(long)]
    pub scoped: bool,

    /// Reference date for the extracted times (default: today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct WaitlistArgs {
    /// Slot table path or URL (default: dashboard source from config)
    #[arg(long)]
    pub source: Option<String>,

    /// Zero-based row of the slot table
    #[arg(long)]
    pub row: usize,

    #[arg(long)]
    pub email: String,

    /// Waitlist file (default: from config)
    #[arg(long)]
    pub waitlist: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    crate::log::init(cli.verbose);

    let mut opts = AppOptions::load_or_default(&cli.config)?;

    match cli.command {
        Command::Scrape(args) => scrape(&mut opts, args),
        Command::Clubs => {
            for Club { name, url } in &opts.scrape.clubs {
                println!("{},{}", name, url);
            }
            Ok(())
        }
        Command::Waitlist(args) => join_waitlist(&opts, args),
    }
}

/// Fold CLI flags over the loaded options.
pub fn apply_scrape_args(opts: &mut AppOptions, args: &ScrapeArgs) -> crate::Result<()> {
    if let Some(city) = &args.city {
        opts.scrape.city = city.clone();
    }
    if !args.clubs.is_empty() {
        opts.scrape.clubs = args.clubs.iter().map(|c| Club::parse_pair(c)).collect::<crate::Result<_>>()?;
    }
    if let Some(out) = &args.out {
        opts.export.set_path(&out.to_string_lossy());
        opts.export.format = ExportFormat::from_path(out);
    }
    if let Some(fmt) = args.format {
        opts.export.format = fmt;
    }
    if args.no_headers {
        opts.export.include_headers = false;
    }
    if args.scoped {
        opts.scrape.association = Association::Scoped;
    }
    Ok(())
}

fn scrape(opts: &mut AppOptions, args: ScrapeArgs) -> Result<()> {
    apply_scrape_args(opts, &args)?;
    if opts.scrape.clubs.is_empty() {
        return Err(eyre!("no clubs configured"));
    }

    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    let fetcher = HttpFetcher::new()?;
    eprintln!("Scraping {} club(s) in {}…", opts.scrape.clubs.len(), opts.scrape.city);

    let report = collect_slots(&fetcher, &opts.scrape, today, Some(&mut CliProgress));
    let path = file::write_slots(&opts.export, &report.slots)?;
    println!("Wrote {} slots to {}", report.slots.len(), path.display());
    Ok(())
}

fn join_waitlist(opts: &AppOptions, args: WaitlistArgs) -> Result<()> {
    let source = args.source.unwrap_or_else(|| opts.dashboard.source.clone());
    let path = args.waitlist.unwrap_or_else(|| opts.dashboard.waitlist.clone());

    let fetcher = HttpFetcher::new()?;
    let slots = store::load_slots_from_source(&source, &fetcher)?;
    let slot = slots
        .get(args.row)
        .ok_or_else(|| eyre!("row {} out of range ({} slots in {})", args.row, slots.len(), source))?;

    let entry = waitlist::join(&path, slot, &args.email)?;
    println!("{}", entry.confirmation());
    Ok(())
}

/// Plain stderr lines, one per club.
struct CliProgress;

impl Progress for CliProgress {
    fn item_done(&mut self, club: &str, slots: usize) {
        eprintln!("  {club}: {slots} slots");
    }
    fn item_failed(&mut self, club: &str, error: &str) {
        eprintln!("  Failed to fetch {club}: {error}");
    }
}
