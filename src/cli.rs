// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::config::{file as config_file, options::DetailsOutput, AppOptions};
use crate::progress::Progress;

/// Rank board games by how confident we can be that they are good.
#[derive(Debug, Parser)]
#[command(name = "bgg_rank", version, about)]
pub struct Cli {
    /// Ratings CSV. Defaults to the latest `20*.csv` in the input directory.
    #[arg(value_name = "CSV_FILE")]
    pub input: Option<PathBuf>,

    /// Directory searched for dated snapshots when no CSV_FILE is given.
    #[arg(long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Report path.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Release year at or above which a game counts as recent.
    #[arg(long, value_name = "YEAR")]
    pub min_year: Option<i32>,

    /// Render a single view (no recent/all toggle).
    #[arg(long, conflicts_with = "min_year")]
    pub no_recent: bool,

    /// Rows per view.
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Confidence multiplier for the lower bound.
    #[arg(short = 'z', long = "z", value_name = "Z")]
    pub z: Option<f64>,

    /// Pseudo-votes blended into the weighted score.
    #[arg(long, value_name = "N")]
    pub prior_votes: Option<u64>,

    /// Rating (1-10) carried by each pseudo-vote.
    #[arg(long, value_name = "RATING")]
    pub prior_rating: Option<f64>,

    /// Skip catalog lookups entirely.
    #[arg(long)]
    pub no_enrich: bool,

    /// Where to write the per-game details CSV.
    #[arg(long, value_name = "FILE", conflicts_with = "no_details")]
    pub details: Option<PathBuf>,

    /// Do not write the details CSV.
    #[arg(long)]
    pub no_details: bool,

    /// Catalog API base URL.
    #[arg(long, value_name = "URL", env = "BGG_RANK_API_BASE")]
    pub api_base: Option<String>,

    /// Minimum gap between two catalog requests.
    #[arg(long, value_name = "MS")]
    pub request_pause_ms: Option<u64>,

    /// Per-request timeout.
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// TOML config file; command-line flags win over it.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More logging (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Append logs to this file instead of stderr.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Defaults, then the config file (if any), then flags.
    pub fn options(&self) -> crate::error::Result<AppOptions> {
        let mut opts = AppOptions::default();
        if let Some(path) = &self.config {
            config_file::load(path)?.apply(&mut opts);
        }
        self.apply(&mut opts);
        opts.validate()?;
        Ok(opts)
    }

    fn apply(&self, opts: &mut AppOptions) {
        if let Some(p) = &self.input { opts.input.path = Some(p.clone()); }
        if let Some(d) = &self.input_dir { opts.input.search_dir = d.clone(); }

        if let Some(z) = self.z { opts.scoring.z = z; }
        if let Some(n) = self.prior_votes { opts.scoring.prior_votes = n; }
        if let Some(r) = self.prior_rating { opts.scoring.prior_rating = r; }

        if let Some(o) = &self.output { opts.report.output = o.clone(); }
        if let Some(n) = self.page_size { opts.report.page_size = n; }
        if let Some(y) = self.min_year { opts.report.min_year = Some(y); }
        if self.no_recent { opts.report.min_year = None; }
        if let Some(d) = &self.details { opts.report.details = DetailsOutput::At(d.clone()); }
        if self.no_details { opts.report.details = DetailsOutput::Off; }

        if self.no_enrich { opts.catalog.enabled = false; }
        if let Some(b) = &self.api_base { opts.catalog.api_base = b.clone(); }
        if let Some(ms) = self.request_pause_ms { opts.catalog.pause = Duration::from_millis(ms); }
        if let Some(s) = self.timeout_secs { opts.catalog.timeout = Duration::from_secs(s); }
    }
}

/* ---------------- Progress bar ---------------- */

/// Progress bar on stderr for the enrichment pass.
pub struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::hidden();
        if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {wide_msg}") {
            bar.set_style(style.progress_chars("=> "));
        }
        Self { bar }
    }
}

impl Default for CliProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.bar.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
    }

    fn log(&mut self, msg: &str) {
        self.bar.set_message(s!(msg));
    }

    fn item_done(&mut self, _id: u32, name: &str) {
        self.bar.set_message(s!(name));
        self.bar.inc(1);
    }

    fn item_failed(&mut self, id: u32, name: &str) {
        self.bar.set_message(format!("{name} ({id}) unavailable"));
        self.bar.inc(1);
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}

/* ---------------- Entry ---------------- */

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init(cli.verbose, cli.log_file.as_deref()).wrap_err("could not set up logging")?;

    let opts = cli.options().wrap_err("invalid configuration")?;
    let mut progress = CliProgress::new();
    let summary = crate::runner::run(&opts, Some(&mut progress)).wrap_err("ranking run failed")?;

    info!(
        input = %summary.input.display(),
        games = summary.games,
        skipped = summary.skipped,
        enriched = summary.enriched,
        unenriched = summary.unenriched,
        "done"
    );
    println!("{}", summary.report.display());
    if let Some(d) = &summary.details {
        println!("{}", d.display());
    }
    Ok(())
}
