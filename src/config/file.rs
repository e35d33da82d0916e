// src/config/file.rs
//! Optional TOML config file. Every key is optional; unknown keys are an error.
//!
//! ```toml
//! [scoring]
//! z = 2.326
//! prior_votes = 25
//! prior_rating = 6.5
//!
//! [report]
//! output = "site/index.html"
//! page_size = 100
//! min_year = 2024          # or: recent = false
//! details = "site/details.csv"
//!
//! [catalog]
//! enabled = true
//! api_base = "https://api.geekdo.com/xmlapi2"
//! timeout_secs = 30
//! request_pause_ms = 1000
//! ```

use std::{fs, path::{Path, PathBuf}, time::Duration};

use serde::Deserialize;

use crate::error::{Error, Result};
use super::options::{AppOptions, DetailsOutput};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub input: InputSection,
    #[serde(default)]
    pub scoring: ScoringSection,
    #[serde(default)]
    pub report: ReportSection,
    #[serde(default)]
    pub catalog: CatalogSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputSection {
    pub path: Option<PathBuf>,
    pub search_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringSection {
    pub z: Option<f64>,
    pub prior_votes: Option<u64>,
    pub prior_rating: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSection {
    pub output: Option<PathBuf>,
    pub page_size: Option<usize>,
    pub min_year: Option<i32>,
    pub recent: Option<bool>,
    pub details: Option<PathBuf>,
    pub write_details: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogSection {
    pub enabled: Option<bool>,
    pub api_base: Option<String>,
    pub timeout_secs: Option<u64>,
    pub request_pause_ms: Option<u64>,
}

pub fn parse(text: &str) -> Result<FileConfig> {
    toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
}

pub fn load(path: &Path) -> Result<FileConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
    parse(&text)
}

impl FileConfig {
    /// Overlay the keys present in the file onto `opts`.
    pub fn apply(&self, opts: &mut AppOptions) {
        if let Some(p) = &self.input.path { opts.input.path = Some(p.clone()); }
        if let Some(d) = &self.input.search_dir { opts.input.search_dir = d.clone(); }

        let s = &self.scoring;
        if let Some(z) = s.z { opts.scoring.z = z; }
        if let Some(v) = s.prior_votes { opts.scoring.prior_votes = v; }
        if let Some(r) = s.prior_rating { opts.scoring.prior_rating = r; }

        let r = &self.report;
        if let Some(o) = &r.output { opts.report.output = o.clone(); }
        if let Some(n) = r.page_size { opts.report.page_size = n; }
        if let Some(y) = r.min_year { opts.report.min_year = Some(y); }
        if r.recent == Some(false) { opts.report.min_year = None; }
        if let Some(d) = &r.details { opts.report.details = DetailsOutput::At(d.clone()); }
        if r.write_details == Some(false) { opts.report.details = DetailsOutput::Off; }

        let c = &self.catalog;
        if let Some(e) = c.enabled { opts.catalog.enabled = e; }
        if let Some(b) = &c.api_base { opts.catalog.api_base = b.clone(); }
        if let Some(t) = c.timeout_secs { opts.catalog.timeout = Duration::from_secs(t); }
        if let Some(p) = c.request_pause_ms { opts.catalog.pause = Duration::from_millis(p); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_overrides_only_present_keys() {
        let cfg = parse(
            r#"
            [scoring]
            z = 2.326

            [report]
            recent = false
            page_size = 50
            "#,
        )
        .unwrap();
        let mut opts = AppOptions::default();
        cfg.apply(&mut opts);
        assert_eq!(opts.scoring.z, 2.326);
        assert_eq!(opts.scoring.prior_votes, 25);
        assert_eq!(opts.report.page_size, 50);
        assert_eq!(opts.report.min_year, None);
        assert!(opts.catalog.enabled);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse("[scoring]\nzz = 1.0\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn empty_file_is_defaults() {
        let mut opts = AppOptions::default();
        parse("").unwrap().apply(&mut opts);
        assert_eq!(opts, AppOptions::default());
    }
}
