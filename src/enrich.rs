// src/enrich.rs
//! Metadata enrichment from the remote catalog.
//!
//! `Catalog` is the seam to the outside world: one call, one outbound request,
//! raw document back. `Enricher` owns the memo cache in front of it and merges
//! parsed `Details` into records. The outcome of every lookup is memoized,
//! failures included, so one id costs at most one request per enricher.

use std::collections::{BTreeSet, HashMap};
use std::thread;
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::options::CatalogOptions;
use crate::core::net;
use crate::data::GameRecord;
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::specs::thing::{parse_details, Details};

/// Source of raw `thing` documents keyed by game id.
pub trait Catalog {
    fn fetch(&mut self, id: u32) -> Result<String>;
}

/* ---------------- HTTP catalog ---------------- */

/// Blocking client for the XML API, paced to at most one request per `pause`.
pub struct HttpCatalog {
    client: Client,
    api_base: String,
    pause: Duration,
    last_request: Option<Instant>,
}

impl HttpCatalog {
    pub fn new(opts: &CatalogOptions) -> Result<Self> {
        let client = net::client(opts.timeout)
            .map_err(|e| Error::Config(format!("cannot build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_base: opts.api_base.trim_end_matches('/').to_string(),
            pause: opts.pause,
            last_request: None,
        })
    }

    pub fn thing_url(&self, id: u32) -> String {
        format!("{}/thing?id={id}&stats=1&versions=1", self.api_base)
    }

    /// Sleep until `pause` has passed since the previous request. The first request goes straight out.
    fn wait_turn(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.pause {
                let nap = self.pause - elapsed;
                debug!(sleep_ms = nap.as_millis() as u64, "rate limiting catalog request");
                thread::sleep(nap);
            }
        }
        self.last_request = Some(Instant::now());
    }
}

impl Catalog for HttpCatalog {
    fn fetch(&mut self, id: u32) -> Result<String> {
        self.wait_turn();
        let url = self.thing_url(id);
        debug!(id, %url, "fetching catalog details");
        net::http_get(&self.client, &url)
            .map_err(|e| Error::RemoteFetch { id, reason: e.to_string() })
    }
}

/* ---------------- Enricher ---------------- */

/// One line of the details side output.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DetailRow {
    pub id: u32,
    pub name: String,
    pub weight: f64,
    pub is_expansion: bool,
    pub reimplements: bool,
    pub has_versions: bool,
    pub n_versions: usize,
}

impl DetailRow {
    fn new(game: &GameRecord, details: &Details) -> Self {
        Self {
            id: game.id,
            name: game.name.clone(),
            weight: details.weight,
            is_expansion: details.is_expansion,
            reimplements: details.reimplements,
            has_versions: details.has_versions(),
            n_versions: details.version_count(),
        }
    }
}

/// Why a lookup failed, kept so a repeat lookup can report it without a request.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Failure {
    Fetch(String),
    Parse(String),
}

impl Failure {
    fn from_error(e: Error) -> Self {
        match e {
            Error::Parse { reason, .. } => Failure::Parse(reason),
            Error::RemoteFetch { reason, .. } => Failure::Fetch(reason),
            other => Failure::Fetch(other.to_string()),
        }
    }

    fn to_error(&self, id: u32) -> Error {
        match self {
            Failure::Fetch(reason) => Error::RemoteFetch { id, reason: reason.clone() },
            Failure::Parse(reason) => Error::Parse { id, reason: reason.clone() },
        }
    }
}

pub struct Enricher<C> {
    catalog: C,
    cache: HashMap<u32, Details>,
    failures: HashMap<u32, Failure>,
}

impl<C: Catalog> Enricher<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog, cache: HashMap::new(), failures: HashMap::new() }
    }

    pub fn catalog(&self) -> &C { &self.catalog }

    /// Number of memoized documents.
    pub fn cached(&self) -> usize { self.cache.len() }

    /// Number of ids whose lookup failed and will not be retried.
    pub fn failed(&self) -> usize { self.failures.len() }

    /// Forget every memoized outcome, successes and failures alike.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.failures.clear();
    }

    /// Details for `id`. The catalog is asked at most once per id; later calls
    /// replay the stored result or the stored failure.
    pub fn fetch_details(&mut self, id: u32) -> Result<Details> {
        if let Some(hit) = self.cache.get(&id) {
            return Ok(hit.clone());
        }
        if let Some(failure) = self.failures.get(&id) {
            return Err(failure.to_error(id));
        }

        let outcome = self.catalog.fetch(id).and_then(|doc| parse_details(&doc, id));
        match outcome {
            Ok(details) => {
                self.cache.insert(id, details.clone());
                Ok(details)
            }
            Err(e) => {
                let failure = Failure::from_error(e);
                let err = failure.to_error(id);
                self.failures.insert(id, failure);
                Err(err)
            }
        }
    }

    /// Enrich every record whose id is in `ids`, in input order.
    /// Failures leave the record unenriched and are logged; they never abort.
    pub fn enrich(
        &mut self,
        games: &mut [GameRecord],
        ids: &BTreeSet<u32>,
        mut progress: Option<&mut dyn Progress>,
    ) -> Vec<DetailRow> {
        let planned = games.iter().filter(|g| ids.contains(&g.id)).count();
        if let Some(p) = progress.as_deref_mut() {
            p.begin(planned);
            p.log("Fetching game details…");
        }

        let mut rows = Vec::with_capacity(planned);
        let mut failed = 0usize;

        for game in games.iter_mut().filter(|g| ids.contains(&g.id)) {
            let outcome = match self.fetch_details(game.id) {
                Ok(details) => Some(details),
                Err(e) => {
                    warn!(id = game.id, name = %game.name, error = %e, "enrichment unavailable");
                    failed += 1;
                    None
                }
            };

            match outcome {
                Some(details) => {
                    game.enrichment = Some(details.enrichment());
                    rows.push(DetailRow::new(game, &details));
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(game.id, &game.name);
                    }
                }
                None => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(game.id, &game.name);
                    }
                }
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        info!(enriched = rows.len(), failed, "enrichment finished");
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thing_url_has_stats_and_versions() {
        let mut opts = CatalogOptions::default();
        opts.api_base = s!("http://localhost:9/xmlapi2/");
        let cat = HttpCatalog::new(&opts).unwrap();
        assert_eq!(
            cat.thing_url(13),
            "http://localhost:9/xmlapi2/thing?id=13&stats=1&versions=1"
        );
    }

    #[test]
    fn first_request_does_not_wait() {
        let mut opts = CatalogOptions::default();
        opts.pause = Duration::from_secs(60);
        let mut cat = HttpCatalog::new(&opts).unwrap();
        let t = Instant::now();
        cat.wait_turn();
        assert!(t.elapsed() < Duration::from_secs(1));
        assert!(cat.last_request.is_some());
    }

    #[test]
    fn second_request_waits_for_pause() {
        let mut opts = CatalogOptions::default();
        opts.pause = Duration::from_millis(50);
        let mut cat = HttpCatalog::new(&opts).unwrap();
        cat.wait_turn();
        let t = Instant::now();
        cat.wait_turn();
        assert!(t.elapsed() >= Duration::from_millis(40));
    }
}
