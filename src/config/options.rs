// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::scoring::ScoringParams;
use crate::error::{Error, Result};
use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppOptions {
    pub input: InputOptions,
    pub scoring: ScoringParams,
    pub report: ReportOptions,
    pub catalog: CatalogOptions,
}

impl AppOptions {
    pub fn validate(&self) -> Result<()> {
        if self.report.page_size == 0 {
            return Err(Error::Config(s!("page_size must be at least 1")));
        }
        if !(self.scoring.z > 0.0) {
            return Err(Error::Config(format!("z must be positive, got {}", self.scoring.z)));
        }
        if !(1.0..=10.0).contains(&self.scoring.prior_rating) {
            return Err(Error::Config(format!(
                "prior_rating must be within 1..=10, got {}",
                self.scoring.prior_rating
            )));
        }
        Ok(())
    }
}

/* ---------------- Input ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputOptions {
    /// Explicit dataset; `None` means "latest dated file in `search_dir`".
    pub path: Option<PathBuf>,
    pub search_dir: PathBuf,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self { path: None, search_dir: PathBuf::from(DEFAULT_INPUT_DIR) }
    }
}

/* ---------------- Report ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailsOutput {
    /// `details-<input stem>.csv` next to the report.
    Beside,
    At(PathBuf),
    Off,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    pub output: PathBuf,
    pub page_size: usize,
    /// Recency threshold for the "recent" view; `None` renders a single view.
    pub min_year: Option<i32>,
    pub details: DetailsOutput,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            page_size: DEFAULT_PAGE_SIZE,
            min_year: Some(DEFAULT_MIN_YEAR),
            details: DetailsOutput::Beside,
        }
    }
}

impl ReportOptions {
    /// Where the details CSV goes for a given input file, if anywhere.
    pub fn details_path(&self, input: &Path) -> Option<PathBuf> {
        match &self.details {
            DetailsOutput::Off => None,
            DetailsOutput::At(p) => Some(p.clone()),
            DetailsOutput::Beside => {
                let stem = input.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
                let name = join!(DETAILS_PREFIX, &stem, ".csv");
                Some(match self.output.parent() {
                    Some(dir) if !dir.as_os_str().is_empty() => dir.join(name),
                    _ => PathBuf::from(name),
                })
            }
        }
    }
}

/* ---------------- Catalog ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogOptions {
    pub enabled: bool,
    pub api_base: String,
    pub timeout: Duration,
    /// Minimum gap between two outbound requests.
    pub pause: Duration,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            api_base: s!(API_BASE),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}
